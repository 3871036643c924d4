//! Row-level statistics for batch field extraction
//!
//! Tracks how many rows were read cleanly and keeps the error messages of
//! the rows that were skipped.

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::constants::SUCCESS_RATE_THRESHOLD;

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of rows encountered
    pub total_records: usize,

    /// Number of rows whose fields were all extracted
    pub records_parsed: usize,

    /// Number of rows skipped due to errors
    pub records_skipped: usize,

    /// List of parsing errors for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            records_parsed: 0,
            records_skipped: 0,
            errors: Vec::new(),
        }
    }

    pub fn record_success(&mut self) {
        self.total_records += 1;
        self.records_parsed += 1;
    }

    /// Count a skipped row, remembering its 1-based line number
    pub fn record_failure(&mut self, line: usize, error: &Error) {
        self.total_records += 1;
        self.records_skipped += 1;
        self.errors.push(format!("Line {}: {}", line, error));
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > SUCCESS_RATE_THRESHOLD
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
