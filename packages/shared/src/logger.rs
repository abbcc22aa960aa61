//! Logger setup shared by the workspace binaries.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::time::JstTimer;

/// Build the env filter for a binary from the current `RUST_LOG`.
pub fn build_env_filter(bin_name: &str, default_level: &str) -> EnvFilter {
    build_env_filter_from(
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        bin_name,
        default_level,
    )
}

/// Build the env filter from explicit directives.
///
/// `rust_log` wins when it is set, non-empty and parses; otherwise
/// `default_level` is applied to the binary's own crate and `warn` to
/// everything else.
pub fn build_env_filter_from(
    rust_log: Option<String>,
    bin_name: &str,
    default_level: &str,
) -> EnvFilter {
    let crate_name = bin_name.replace('-', "_");
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(format!("warn,{crate_name}={default_level}")))
}

/// Initialize the global tracing subscriber.
///
/// Calling this more than once is a no-op after the first success.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = build_env_filter(bin_name, default_level);
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_timer(JstTimer)
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init();

    if let Err(e) = result {
        tracing::debug!("Logger already initialized for {}: {}", bin_name, e);
    }
}
