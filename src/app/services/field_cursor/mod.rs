//! Cursor-driven CSV field reader
//!
//! This module provides a small state machine over one in-memory text buffer.
//! A cursor walks the buffer and each read returns the next comma- or
//! newline-delimited field, optionally converted to a numeric type.
//!
//! ## Architecture
//!
//! The reader is organized into logical components:
//! - [`parser`] - Cursor state, trimming, bounds checks and column counting
//! - [`typed`] - Numeric conversions layered on the string read
//! - [`layout`] - Per-column field types and dynamically typed values
//! - [`stats`] - Row-level statistics for batch runs
//!
//! ## Usage
//!
//! ```rust
//! use csv_cursor::app::services::field_cursor::FieldCursor;
//!
//! # fn example() -> csv_cursor::Result<()> {
//! let mut cursor = FieldCursor::new("a,b,c\n1,2,3");
//! assert_eq!(cursor.total_columns(), 3);
//! assert_eq!(cursor.next_string()?, "a");
//! assert_eq!(cursor.next_string()?, "b");
//! assert_eq!(cursor.next_string()?, "c");
//! assert_eq!(cursor.next_integer()?, 1);
//! # Ok(())
//! # }
//! ```
//!
//! Leading commas and spaces are skipped before every read, so an empty
//! field such as the middle of `1,,3` is never returned.

pub mod layout;
pub mod parser;
pub mod stats;
pub mod typed;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use layout::{FieldType, FieldValue, RowLayout};
pub use parser::{CursorCheck, FieldCursor};
pub use stats::ParseStats;
