//! CSV Cursor Library
//!
//! A small Rust library for pulling typed fields out of comma-separated text
//! one field at a time.
//!
//! This library provides tools for:
//! - Sequential field extraction from an in-memory CSV buffer with a movable cursor
//! - Column counting for the first row of a buffer
//! - Typed conversion of fields into `i16`, `i32`, `i64`, `f32` and `f64`
//! - Line-oriented file reading and writing
//! - Interactive, retrying prompts for typed values over explicit input handles
//!
//! ```rust
//! use csv_cursor::FieldCursor;
//!
//! # fn example() -> csv_cursor::Result<()> {
//! let mut cursor = FieldCursor::new("id,temp\n7,21.5");
//! assert_eq!(cursor.total_columns(), 2);
//! assert_eq!(cursor.next_string()?, "id");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod services {
        pub mod field_cursor;
        pub mod line_io;
        pub mod prompt;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::services::field_cursor::{
    CursorCheck, FieldCursor, FieldType, FieldValue, ParseStats, RowLayout,
};
pub use app::services::line_io::{LineFile, LineReader, LineSink, LineSource, LineWriter};
pub use app::services::prompt::{PromptOptions, PromptService};
pub use config::Config;
pub use error::{Error, Result};
