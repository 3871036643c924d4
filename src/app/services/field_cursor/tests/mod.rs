//! Test utilities for the field cursor
//!
//! Shared helpers used across the parser, typed reader, layout and
//! statistics test modules.

use super::FieldCursor;


/// Read strings until the cursor reports it is exhausted
pub fn drain_strings(cursor: &mut FieldCursor) -> Vec<String> {
    let mut fields = Vec::new();
    while let Ok(field) = cursor.next_string() {
        fields.push(field);
    }
    fields
}

/// Count the comma-separated tokens that are not blank
pub fn count_non_empty_tokens(text: &str) -> usize {
    text.split([',', '\n'])
        .filter(|token| !token.trim_matches(' ').is_empty())
        .count()
}
