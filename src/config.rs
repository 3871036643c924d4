//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! command-line overrides applied by the CLI.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::services::field_cursor::CursorCheck;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_INVALID_INPUT_MESSAGE, DEFAULT_LOG_LEVEL,
    VALID_LOG_LEVELS,
};
use crate::{Error, Result};

/// Field cursor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Which position `set_cursor` validates
    pub cursor_check: CursorCheck,

    /// Treat the first line of an input file as a header row
    pub skip_header: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            cursor_check: CursorCheck::Requested,
            skip_header: false,
        }
    }
}

/// Interactive prompt settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Shown after an invalid answer; `None` retries silently
    pub invalid_message: Option<String>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            invalid_message: Some(DEFAULT_INVALID_INPUT_MESSAGE.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub prompt: PromptConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Default config file location, e.g. `~/.config/csv-cursor/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;
        let config: Config = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, else from the default location if it
    /// exists, else fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_config_path() {
            Ok(default_path) if default_path.exists() => Self::load_from_file(&default_path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check that all values are usable
    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Invalid log level '{}'. Expected one of: {}",
                self.logging.level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        if let Some(message) = &self.prompt.invalid_message {
            if message.trim().is_empty() {
                return Err(Error::configuration(
                    "prompt.invalid_message must not be blank; omit it to retry silently",
                ));
            }
        }

        Ok(())
    }

    /// Use the pre-move cursor check
    pub fn with_legacy_cursor_check(mut self) -> Self {
        self.parser.cursor_check = CursorCheck::Current;
        self
    }

    pub fn with_skip_header(mut self, skip_header: bool) -> Self {
        self.parser.skip_header = skip_header;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    pub fn with_invalid_message(mut self, message: Option<String>) -> Self {
        self.prompt.invalid_message = message;
        self
    }
}
