use serde::{Deserialize, Serialize};

use crate::error::LoggingError;

/// Output format of log events.
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Logging setup for applications that embed the library.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base level: trace, debug, info, warn or error.
    pub level: String,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub with_target: bool,
    /// Extra `target=level` directives, e.g. `propfile=trace`.
    pub directives: Vec<String>,
    /// Let `RUST_LOG` replace the directives above when it is set. Off by
    /// default, so the environment is only consulted on request.
    pub respect_rust_log: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            with_ansi: true,
            with_target: true,
            directives: Vec::new(),
            respect_rust_log: false,
        }
    }
}

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl LoggingConfig {
    /// Full `EnvFilter` directive: the base level followed by the extra
    /// directives.
    pub fn build_filter_directive(&self) -> String {
        let mut parts = Vec::with_capacity(self.directives.len() + 1);
        parts.push(self.level.to_lowercase());
        parts.extend(self.directives.iter().map(|d| d.trim().to_string()));
        parts.join(",")
    }

    pub fn validate(&self) -> Result<(), LoggingError> {
        let level = self.level.to_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(LoggingError::InvalidDirective {
                directive: self.level.clone(),
                reason: format!("level must be one of {}", LEVELS.join(", ")),
            });
        }
        if let Some(empty) = self.directives.iter().find(|d| d.trim().is_empty()) {
            return Err(LoggingError::InvalidDirective {
                directive: empty.clone(),
                reason: "empty directive".to_string(),
            });
        }
        Ok(())
    }
}
