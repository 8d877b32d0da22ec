//! Optional `tracing` setup for applications embedding the library.
//!
//! The library itself only emits events; nothing is installed unless the
//! application calls [`init_logging`].

pub mod config;
mod filters;
mod formatter;

pub use config::{LogFormat, LoggingConfig};
pub use filters::{build_filter, build_filter_from_config};
pub use formatter::build_formatter_from_config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::LoggingError;

/// Installs a global subscriber writing to stdout.
///
/// Fails on an invalid configuration or when a global subscriber is already
/// installed.
pub fn init_logging(config: LoggingConfig) -> Result<(), LoggingError> {
    config.validate()?;

    let env_filter = filters::build_filter_from_config(&config)?;
    let layer = formatter::build_formatter_from_config(&config, std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        format = ?config.format,
        "Logging system initialized"
    );

    Ok(())
}
