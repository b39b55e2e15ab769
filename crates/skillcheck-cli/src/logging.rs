//! Log filter resolution and subscriber setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Explicit filter directive, e.g. `debug` or `skillcheck=trace`.
pub const LOG_ENV: &str = "SKILLCHECK_LOG";
/// Set to `test` by test harnesses to quiet everything below errors.
pub const MODE_ENV: &str = "SKILLCHECK_ENV";

const DEFAULT_FILTER: &str = "warn";
const TEST_FILTER: &str = "error";

/// Pick the filter directive: flag, then `SKILLCHECK_LOG`, then the test-mode
/// default, then `warn`.
pub fn resolve_filter(flag: Option<&str>, log_env: Option<&str>, mode: Option<&str>) -> String {
    fn non_empty(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|v| !v.is_empty())
    }
    if let Some(filter) = non_empty(flag).or_else(|| non_empty(log_env)) {
        return filter.to_string();
    }
    if mode.is_some_and(|mode| mode.eq_ignore_ascii_case("test")) {
        TEST_FILTER.to_string()
    } else {
        DEFAULT_FILTER.to_string()
    }
}

/// Install the stderr subscriber. Safe to call when one is already set.
pub fn init(flag: Option<&str>, ansi: bool) {
    let log_env = std::env::var(LOG_ENV).ok();
    let mode = std::env::var(MODE_ENV).ok();
    let directive = resolve_filter(flag, log_env.as_deref(), mode.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false),
        )
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_environment() {
        assert_eq!(resolve_filter(Some("debug"), Some("info"), Some("test")), "debug");
    }

    #[test]
    fn log_env_used_without_flag() {
        assert_eq!(resolve_filter(None, Some("skillcheck=trace"), None), "skillcheck=trace");
    }

    #[test]
    fn test_mode_quiets_to_errors() {
        assert_eq!(resolve_filter(None, None, Some("test")), "error");
        assert_eq!(resolve_filter(Some(" "), None, Some("TEST")), "error");
    }

    #[test]
    fn default_is_warn() {
        assert_eq!(resolve_filter(None, None, None), "warn");
        assert_eq!(resolve_filter(None, None, Some("production")), "warn");
    }
}
