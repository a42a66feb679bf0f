//! Tracing subscriber setup for the `serve` command.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor a config value is given
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level filter '{level}': {source}")]
    InvalidFilter {
        level: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Parse a configured filter directive, independent of the environment.
pub fn parse_filter(log_level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(log_level).map_err(|source| LoggingError::InvalidFilter {
        level: log_level.to_string(),
        source,
    })
}

/// Install the global fmt subscriber; `RUST_LOG` wins over `log_level` when set.
pub fn init_tracing(log_level: &str) -> Result<(), LoggingError> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        parse_filter(log_level)?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))
}
