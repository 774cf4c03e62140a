//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;

/// Resolves the filter: an explicit `directive` first, then `RUST_LOG`, then
/// [`DEFAULT_LOG_FILTER`]. An unparsable source is skipped.
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs a stderr fmt subscriber using [`build_filter`].
///
/// Calling this more than once is a no-op.
pub fn init(directive: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
