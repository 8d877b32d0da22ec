use tracing_subscriber::EnvFilter;

use crate::{error::LoggingError, logging::config::LoggingConfig};

/// Builds the event filter for `config`.
///
/// When `respect_rust_log` is set and `RUST_LOG` holds a valid directive, it
/// wins over the configured one.
pub fn build_filter_from_config(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if config.respect_rust_log {
        if let Ok(env_filter) = EnvFilter::try_from_default_env() {
            return Ok(env_filter);
        }
    }
    build_filter(&config.build_filter_directive())
}

/// Parses a single `EnvFilter` directive string.
pub fn build_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidDirective {
        directive: directive.to_string(),
        reason: e.to_string(),
    })
}
