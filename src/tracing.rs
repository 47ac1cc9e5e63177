//! Logging setup for the command-line binary.
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=inkmark::notifier=debug` - module-level filtering

use tracing_subscriber::EnvFilter;

/// Initialize the console tracing subscriber. Defaults to `warn` when
/// RUST_LOG is unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
