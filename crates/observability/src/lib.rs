//! Shared tracing/logging setup for GES services.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging.
///
/// JSON lines to stderr, filtered by `RUST_LOG` when set. Safe to call more
/// than once; later calls are no-ops (tests initialize per-process).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .with_target(false)
        .try_init();
}
