//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `GRATING_LOG=debug`.
pub const LOG_ENV: &str = "GRATING_LOG";
/// Filter used when [`LOG_ENV`] is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Install a formatted stderr subscriber. Safe to call more than once;
/// later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
