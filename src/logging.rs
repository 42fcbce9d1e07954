//! Diagnostic logging to stderr

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber. Filtered by `RUST_LOG`, `warn` when unset.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
