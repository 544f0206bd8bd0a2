//! Layered runtime configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `weatherman.toml` in the working directory (or an explicit file, which
//! must then exist), and `WEATHERMAN_*` environment variables.

use crate::error::Result;
use crate::utils::constants::{
    CONFIG_FILE_STEM, DEFAULT_BAR_SYMBOL, DEFAULT_DELIMITER, DEFAULT_FILE_EXTENSION, ENV_PREFIX,
};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct WeathermanConfig {
    /// Extension of the observation files to load
    #[validate(length(min = 1))]
    pub file_extension: String,

    /// Single-character field delimiter
    #[validate(length(equal = 1))]
    pub delimiter: String,

    /// Symbol repeated to draw chart bars
    #[validate(length(min = 1))]
    pub bar_symbol: String,

    /// Colourise the bar chart
    pub color: bool,
}

impl Default for WeathermanConfig {
    fn default() -> Self {
        Self {
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            bar_symbol: DEFAULT_BAR_SYMBOL.to_string(),
            color: true,
        }
    }
}

impl WeathermanConfig {
    /// Load from `path` if given, else from an optional `weatherman.*` file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(CONFIG_FILE_STEM).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        debug!("Loaded configuration: {:?}", config);

        Ok(config)
    }

    /// The delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(ConfigError::Message(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            ))
            .into()),
        }
    }
}
