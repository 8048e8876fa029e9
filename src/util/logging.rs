//! Diagnostic logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for program
//! output. The level defaults to `warn` (`debug` with `--debug`) and
//! `RUST_LOG` overrides both.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .with_writer(std::io::stderr)
        .try_init();
}
