//! Error handling for cursor parsing, line I/O and prompting.
//!
//! Provides one error type with context for cursor bounds violations,
//! numeric conversion failures and the I/O collaborators around the parser.

use thiserror::Error;

/// Result type alias for the CSV cursor library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CSV cursor operations
#[derive(Error, Debug)]
pub enum Error {
    /// Cursor moved, or would have to read, past the end of the text
    #[error("Cursor exceeds the size of the text: position {position}, length {length}")]
    OutOfRange { position: usize, length: usize },

    /// Requested cursor position splits a multi-byte character
    #[error("Cursor position {position} is not on a character boundary")]
    MisalignedCursor { position: usize },

    /// Field text is not a valid literal of the requested type
    #[error("Cannot parse '{value}' as {target}: {reason}")]
    Parse {
        value: String,
        target: &'static str,
        reason: String,
    },

    /// Row layout definition is malformed
    #[error("Invalid row layout: {message}")]
    InvalidLayout { message: String },

    /// Input stream ended while waiting for an answer
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an out-of-range error
    pub fn out_of_range(position: usize, length: usize) -> Self {
        Self::OutOfRange { position, length }
    }

    /// Create a misaligned cursor error
    pub fn misaligned_cursor(position: usize) -> Self {
        Self::MisalignedCursor { position }
    }

    /// Create a parse error for a field value
    pub fn parse(
        value: impl Into<String>,
        target: &'static str,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::Parse {
            value: value.into(),
            target,
            reason: reason.to_string(),
        }
    }

    /// Create a row layout error
    pub fn invalid_layout(message: impl Into<String>) -> Self {
        Self::InvalidLayout {
            message: message.into(),
        }
    }

    /// Create an input closed error
    pub fn input_closed(prompt: impl Into<String>) -> Self {
        Self::InputClosed {
            prompt: prompt.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for the cursor-exhausted family of errors
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// True when a field was read but could not be converted
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Failed to parse configuration file: {}", error),
        }
    }
}
