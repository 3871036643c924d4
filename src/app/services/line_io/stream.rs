//! Stream adapters for the line traits
//!
//! Lets stdin/stdout, in-memory buffers and sockets stand in for a file.

use std::io::{BufRead, Lines, Write};
use std::iter::Peekable;

use super::{LineSink, LineSource, end_of_input};
use crate::{Error, Result};

/// Line source over any buffered reader
pub struct LineReader<R: BufRead> {
    lines: Peekable<Lines<R>>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines().peekable(),
        }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn has_line(&mut self) -> Result<bool> {
        Ok(self.lines.peek().is_some())
    }

    fn read_line(&mut self) -> Result<String> {
        match self.lines.next() {
            Some(line) => line.map_err(|e| Error::io("Failed to read line", e)),
            None => Err(Error::io("No more lines in input", end_of_input())),
        }
    }
}

/// Line sink over any writer, flushing after every call
pub struct LineWriter<W: Write> {
    writer: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for LineWriter<W> {
    fn write(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| Error::io("Failed to write output", e))
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)
            .and_then(|_| self.writer.flush())
            .map_err(|e| Error::io("Failed to write output", e))
    }
}
