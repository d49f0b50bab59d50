//! Diagnostic logging for the CLI.
//!
//! Events go to stderr so stdout carries only command output.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Filtered by `RUST_LOG`, `warn` otherwise.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
