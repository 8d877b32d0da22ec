use ::config::{builder::DefaultState, Config, ConfigBuilder};
use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, escape::EscapePolicy};

/// Default loader chunk size (8kb).
pub const DEFAULT_READ_BUFFER_SIZE: usize = 8 * 1024;

/// Knobs for loading and storing `.properties` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Characters accepted after a backslash, and how control characters
    /// are written back.
    pub escape_policy: EscapePolicy,
    /// Longest key or value in bytes. `None` (the default) means no limit.
    pub max_member_len: Option<usize>,
    /// Size of the chunks read from the input.
    pub read_buffer_size: usize,
    /// Write entries in key order instead of table order.
    pub sorted_output: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            escape_policy: EscapePolicy::default(),
            max_member_len: None,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            sorted_output: false,
        }
    }
}

impl Settings {
    /// Config builder seeded with the default values.
    ///
    /// `max_member_len` has no seeded value and stays unlimited unless a
    /// source sets it. No source is attached: add files, an environment prefix or overrides
    /// as needed, then pass the built `Config` to [`Settings::from_config`].
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let builder = Config::builder()
            .set_default("escape_policy", "extended")?
            .set_default("read_buffer_size", DEFAULT_READ_BUFFER_SIZE as i64)?
            .set_default("sorted_output", false)?;
        Ok(builder)
    }

    /// Deserializes and validates settings from a built configuration.
    pub fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        let settings: Settings = cfg.clone().try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.read_buffer_size == 0 {
            return Err(ConfigError::Invalid {
                field: "read_buffer_size",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.max_member_len == Some(0) {
            return Err(ConfigError::Invalid {
                field: "max_member_len",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn with_escape_policy(
        mut self,
        policy: EscapePolicy,
    ) -> Self {
        self.escape_policy = policy;
        self
    }

    pub fn with_max_member_len(
        mut self,
        limit: Option<usize>,
    ) -> Self {
        self.max_member_len = limit;
        self
    }

    pub fn with_sorted_output(
        mut self,
        sorted: bool,
    ) -> Self {
        self.sorted_output = sorted;
        self
    }
}
