// ABOUTME: Tracing subscriber setup for the bikelinks binary
// ABOUTME: Honors RUST_LOG and writes to stderr so `state` output stays clean JSON

use bikelinks_config::{DEFAULT_LOG_FILTER, RUST_LOG};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
