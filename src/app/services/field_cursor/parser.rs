//! Core cursor state machine
//!
//! This module owns the buffer and the read position, and implements the
//! trim / bounds-check / accumulate cycle every field read goes through.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{FIELD_DELIMITER, RECORD_DELIMITER, TRIM_CHAR};
use crate::{Error, Result};

/// Which position `set_cursor` validates before moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorCheck {
    /// Validate the requested position
    #[default]
    Requested,
    /// Validate the cursor as it stands before the move.
    ///
    /// A move to an invalid target succeeds while the current cursor is in
    /// bounds, and a move to a valid target fails once the buffer is exhausted.
    Current,
}

/// Sequential field reader over one CSV text buffer
///
/// The reader is either *positioned* (cursor inside the text) or
/// *exhausted* (cursor at the end). Reads move it towards exhaustion;
/// [`FieldCursor::set_text`] and [`FieldCursor::set_cursor`] move it back.
#[derive(Debug, Clone, Default)]
pub struct FieldCursor {
    text: String,
    cursor: usize,
    check: CursorCheck,
}

impl FieldCursor {
    /// Create a reader positioned at the start of `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
            check: CursorCheck::default(),
        }
    }

    /// Choose how `set_cursor` validates positions
    pub fn with_cursor_check(mut self, check: CursorCheck) -> Self {
        self.check = check;
        self
    }

    /// Replace the text and rewind to the start
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = 0;
    }

    /// Move the cursor to `position`
    ///
    /// The position must be strictly less than the text length. Which
    /// position is checked depends on [`CursorCheck`].
    pub fn set_cursor(&mut self, position: usize) -> Result<()> {
        let checked = match self.check {
            CursorCheck::Requested => position,
            CursorCheck::Current => self.cursor,
        };
        self.check_bounds(checked)?;

        // Past-the-end targets only get here under the legacy check
        if position < self.text.len() && !self.text.is_char_boundary(position) {
            return Err(Error::misaligned_cursor(position));
        }

        self.cursor = position;
        Ok(())
    }

    /// Current read position (byte offset)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The text being read
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True once the cursor has reached the end of the text
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// Unread remainder of the text
    pub fn remaining(&self) -> &str {
        self.text.get(self.cursor..).unwrap_or("")
    }

    pub fn cursor_check(&self) -> CursorCheck {
        self.check
    }

    /// Number of columns in the first row
    ///
    /// Counts commas up to the first newline and adds one. An empty text
    /// therefore has one column. The cursor is not moved.
    pub fn total_columns(&self) -> usize {
        let commas = self
            .text
            .bytes()
            .take_while(|&b| b != RECORD_DELIMITER)
            .filter(|&b| b == FIELD_DELIMITER)
            .count();
        commas + 1
    }

    /// Read the next field as an owned string
    pub fn next_string(&mut self) -> Result<String> {
        self.next_field().map(str::to_owned)
    }

    /// Read the next field, borrowing it from the text
    ///
    /// Skips any run of commas and spaces, fails with
    /// [`Error::OutOfRange`] if nothing is left, then consumes characters up
    /// to and including the next comma or newline. The delimiter is not part
    /// of the returned field.
    pub fn next_field(&mut self) -> Result<&str> {
        self.trim();
        self.check_bounds(self.cursor)?;

        let bytes = self.text.as_bytes();
        let start = self.cursor;
        let mut end = start;

        while self.cursor < bytes.len() {
            let b = bytes[self.cursor];
            self.cursor += 1;

            if b == FIELD_DELIMITER || b == RECORD_DELIMITER {
                break;
            }
            end = self.cursor;
        }

        trace!(start, end, cursor = self.cursor, "read field");
        Ok(&self.text[start..end])
    }

    /// Skip leading commas and spaces
    fn trim(&mut self) {
        let bytes = self.text.as_bytes();
        while self.cursor < bytes.len()
            && (bytes[self.cursor] == FIELD_DELIMITER || bytes[self.cursor] == TRIM_CHAR)
        {
            self.cursor += 1;
        }
    }

    fn check_bounds(&self, position: usize) -> Result<()> {
        if position >= self.text.len() {
            return Err(Error::out_of_range(position, self.text.len()));
        }
        Ok(())
    }
}
