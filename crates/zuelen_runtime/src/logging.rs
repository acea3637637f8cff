//! Tracing subscriber setup for the binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when neither `RUST_LOG` nor an explicit level is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the filter: an explicit level wins over `RUST_LOG`.
#[must_use]
pub fn env_filter(log_level: Option<&str>) -> EnvFilter {
    match log_level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
    }
}

/// Installs a stderr subscriber. Returns false if one was already installed.
pub fn init_tracing(log_level: Option<&str>) -> bool {
    let stderr_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter(log_level))
        .with(stderr_layer)
        .try_init()
        .is_ok()
}
