//! Logger initialization.
//!
//! The subscriber is installed once at startup; components log through the
//! `tracing` macros and inherit request spans from the HTTP middleware.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON structured logs.
    Json,
    /// Human-readable text logs.
    #[default]
    Text,
}

impl LogFormat {
    /// Maps exactly `json` to [`LogFormat::Json`]; anything else is text.
    pub fn parse(format: &str) -> Self {
        if format == "json" {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Maps a configured level name to a filter.
///
/// `debug`, `warn` and `error` are recognised case-insensitively; anything
/// else means `info`.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "debug" => LevelFilter::DEBUG,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => LevelFilter::INFO,
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG`, when set, takes precedence over `log_level`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(log_level: &str, log_format: &str) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(parse_level(log_level).into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(env_filter);

    match LogFormat::parse(log_format) {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Text => registry.with(fmt::layer()).try_init(),
    }
}
