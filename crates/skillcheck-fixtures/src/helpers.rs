//! Common test helper functions.
//!
//! These utilities reduce boilerplate in integration tests by providing
//! standard implementations for temp directories and fixture files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

static TEMP_DIR_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Create a unique temporary directory for a test.
///
/// The directory name combines the process id, a timestamp and a per-process
/// sequence number so parallel tests never share a directory. The directory
/// is created immediately.
///
/// # Panics
///
/// Panics if the directory cannot be created.
///
/// # Example
///
/// ```ignore
/// let dir = temp_dir("discovery");
/// // dir is something like /tmp/skillcheck-discovery-4242-1703520000000-0
/// ```
#[must_use]
pub fn temp_dir(prefix: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let sequence = TEMP_DIR_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "skillcheck-{prefix}-{}-{stamp}-{sequence}",
        std::process::id()
    ));

    fs::create_dir_all(&dir).expect("failed to create temp directory");

    dir
}

/// Write any serializable fixture as pretty JSON.
///
/// # Panics
///
/// Panics if serialization or file writing fails.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) {
    let data = serde_json::to_vec_pretty(value).expect("failed to serialize fixture");
    fs::write(path, data).expect("failed to write fixture file");
}
