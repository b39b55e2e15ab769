//! Loading fixtures and captured responses from disk.

use crate::error::{CheckError, CheckResult};
use crate::model::{DirectiveRequest, DiscoveryKind, ResultsById};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a fixture file. `.yaml`/`.yml` files are parsed as YAML, everything
/// else as JSON.
pub fn load_fixture_file<T: DeserializeOwned>(path: &Path) -> CheckResult<T> {
    let data = fs::read_to_string(path).map_err(|err| {
        CheckError::io(format!("failed to read fixture {}", path.display()), err)
    })?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "yaml" || ext == "yml");
    if is_yaml {
        serde_yml::from_str(&data).map_err(|err| {
            CheckError::decode(format!("failed to parse yaml {}", path.display()), err)
        })
    } else {
        serde_json::from_str(&data).map_err(|err| {
            CheckError::decode(format!("failed to parse json {}", path.display()), err)
        })
    }
}

pub fn load_directive_request(path: &Path) -> CheckResult<DirectiveRequest> {
    load_fixture_file(path)
}

/// Pull the discovered devices out of a captured value.
///
/// Accepts either a bare list or a full discovery response:
/// `event.payload.endpoints` for endpoints, `payload.discoveredAppliances`
/// (also under `event`) for appliances.
pub fn discovered_entities(kind: DiscoveryKind, value: &Value) -> CheckResult<Vec<Value>> {
    if let Some(items) = value.as_array() {
        return Ok(items.clone());
    }
    let pointers: &[&str] = match kind {
        DiscoveryKind::Endpoints => &["/event/payload/endpoints", "/payload/endpoints"],
        DiscoveryKind::Appliances => &[
            "/payload/discoveredAppliances",
            "/event/payload/discoveredAppliances",
        ],
    };
    pointers
        .iter()
        .find_map(|pointer| value.pointer(pointer).and_then(Value::as_array))
        .cloned()
        .ok_or_else(|| {
            CheckError::decode(
                format!("no discovered {} in response", kind.label()),
                "expected a list or a discovery response",
            )
        })
}

/// Interpret a fixture value as expected records keyed by device id.
pub fn results_by_id(value: Value) -> CheckResult<ResultsById> {
    match value {
        Value::Object(results) => Ok(results),
        other => Err(CheckError::decode(
            "expected results must be an object keyed by device id",
            other,
        )),
    }
}
