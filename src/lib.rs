//! Reader and writer for the `.properties` key-value text format.
//!
//! ```
//! use propfile::Properties;
//!
//! let mut props = Properties::new();
//! props.load("# settings\nname = demo\npath = c:\\\\tmp\n".as_bytes())?;
//! assert_eq!(props.get("name"), Some("demo"));
//! assert_eq!(props.get("path"), Some("c:\\tmp"));
//!
//! let mut out = Vec::new();
//! props.set("a=b", "c");
//! props.store(&mut out)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Loader and serializer settings.
pub mod config;
/// Load, configuration and logging errors.
pub mod error;
/// Escape vocabulary shared by both directions.
pub mod escape;
/// Optional `tracing` subscriber setup.
#[cfg(feature = "logging")]
pub mod logging;
/// Streaming text parser.
pub mod parser;
/// The key-value table.
pub mod properties;
/// Text writer.
pub mod serializer;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

pub use config::Settings;
#[cfg(feature = "logging")]
pub use error::LoggingError;
pub use error::{ConfigError, LoadError, LoadResult};
pub use escape::{escape_key, escape_value, EscapePolicy};
#[cfg(feature = "logging")]
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use parser::{load_from, LoadSummary, Parser, PropertySink};
pub use properties::Properties;
pub use propfile_error::{ErrorExt, StatusCode, SyntaxError};
pub use serializer::{store_to, Serializer};
