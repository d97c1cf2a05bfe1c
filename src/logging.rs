//! Logging setup
//!
//! Structured logging through `tracing`, written to stderr so search results on
//! stdout stay machine-readable.
//!
//! The filter comes from `RUST_LOG` when set; otherwise it is `info`, or `debug`
//! when the CLI `--debug` flag is given.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default filter directive for the given debug setting
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Build the env filter (RUST_LOG wins over the default)
pub fn build_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(debug)))
}

/// Initialize the global subscriber
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(debug: bool) -> anyhow::Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(build_filter(debug))
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
