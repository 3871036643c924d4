//! Application constants for the CSV cursor
//!
//! This module contains the fixed delimiters, default values and names
//! used throughout the library and the command-line tool.

// =============================================================================
// Delimiters
// =============================================================================

/// Separates fields within a row
pub const FIELD_DELIMITER: u8 = b',';

/// Separates rows within a buffer
pub const RECORD_DELIMITER: u8 = b'\n';

/// Only whitespace skipped during the trim phase (tabs are kept)
pub const TRIM_CHAR: u8 = b' ';

// =============================================================================
// Prompt Defaults
// =============================================================================

/// Message shown when typed input cannot be converted
pub const DEFAULT_INVALID_INPUT_MESSAGE: &str = "Invalid input, please try again.";

/// Words accepted as `true` by boolean prompts (case-insensitive)
pub const TRUE_WORDS: &[&str] = &["true", "1"];

/// Words accepted as `false` by boolean prompts (case-insensitive)
pub const FALSE_WORDS: &[&str] = &["false", "0"];

// =============================================================================
// Configuration and Logging
// =============================================================================

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "csv-cursor";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log target used for the default `EnvFilter` directive
pub const LOG_TARGET: &str = "csv_cursor";

/// Default log level when no verbosity flags are given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted in configuration files
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Success rate (percent) above which a batch run counts as successful
pub const SUCCESS_RATE_THRESHOLD: f64 = 90.0;
