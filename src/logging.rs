//! Logging setup for the runner binary
//!
//! Logs go to stderr so stdout carries nothing but kata results.

use tracing_subscriber::EnvFilter;

/// Initialize tracing. `RUST_LOG` wins over `default_level` when set.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init: a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
