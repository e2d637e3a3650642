//! Diagnostic logging to stderr, kept apart from the console progress on stdout.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,shop_images=info";

/// Initialize tracing with `RUST_LOG`, falling back to `warn,shop_images=info`
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
