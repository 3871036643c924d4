//! Line-oriented input and output
//!
//! The field cursor works on one text buffer at a time. This module supplies
//! those buffers from files or streams and receives the rejoined output.
//!
//! - [`LineSource`] hands out one line at a time
//! - [`LineSink`] accepts text and whole lines
//! - [`LineFile`] implements both over a single path, switching between
//!   reading and writing on demand
//! - [`LineReader`] / [`LineWriter`] adapt any `BufRead` / `Write`

pub mod file;
pub mod stream;

#[cfg(test)]
mod tests;

pub use file::LineFile;
pub use stream::{LineReader, LineWriter};

use crate::Result;

/// Something that yields lines without their terminators
pub trait LineSource {
    /// True when another line can be read
    fn has_line(&mut self) -> Result<bool>;

    /// Read the next line; fails once the source is exhausted
    fn read_line(&mut self) -> Result<String>;

    /// Read every remaining line
    fn read_all(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        while self.has_line()? {
            lines.push(self.read_line()?);
        }
        Ok(lines)
    }
}

/// Something that accepts output text
pub trait LineSink {
    fn write(&mut self, text: &str) -> Result<()>;

    /// Write `text` followed by a newline
    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}

fn end_of_input() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "no more lines")
}
