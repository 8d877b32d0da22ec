pub mod config;
pub mod load;
#[cfg(feature = "logging")]
pub mod logging;

pub use config::ConfigError;
pub use load::{LoadError, LoadResult};
#[cfg(feature = "logging")]
pub use logging::LoggingError;
