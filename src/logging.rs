//! Diagnostic logging setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, e.g. `TIMED_LOG=debug`.
pub const LOG_ENV: &str = "TIMED_LOG";

/// Install the global subscriber. Logs go to stderr so they never mix with
/// command output; the default level only lets warnings through.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) is not an error worth reporting.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}
