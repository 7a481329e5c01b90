//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Build the log filter from a `RUST_LOG`-style directive string.
///
/// Missing or unparsable directives fall back to `warn`.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Install the global subscriber. Diagnostics go to stderr, tagged with the
/// emitting thread.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_thread_names(true)
        .with_writer(std::io::stderr)
        .init();
}
