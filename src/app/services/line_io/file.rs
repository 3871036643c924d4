//! File-backed line source and sink

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Lines, Read, Seek, SeekFrom, Write};
use std::iter::Peekable;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{LineSink, LineSource, end_of_input};
use crate::{Error, Result};

enum Handle {
    Closed,
    Reading(Peekable<Lines<BufReader<File>>>),
    Writing(BufWriter<File>),
}

/// One file that can be read line by line or written
///
/// Nothing is opened until the first operation. Switching from reading to
/// writing closes the reader and truncates the file; switching back reopens
/// it from the first line.
pub struct LineFile {
    path: PathBuf,
    handle: Handle,
}

impl LineFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            handle: Handle::Closed,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Release the open handle, if any
    pub fn close(&mut self) -> Result<()> {
        if let Handle::Writing(writer) = &mut self.handle {
            writer
                .flush()
                .map_err(|e| Error::io(format!("Failed to flush {}", self.path.display()), e))?;
        }
        self.handle = Handle::Closed;
        Ok(())
    }

    /// Add one line at the end of the file, leaving existing content as is
    ///
    /// Any open handle is closed first. The line ends with `\r\n` when the
    /// file already ends that way and with `\n` otherwise; a file whose last
    /// line has no terminator gets one before the new line.
    pub fn append_line(&mut self, text: &str) -> Result<()> {
        self.close()?;
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io(format!("File {} cannot be found", self.file_name()), e))?;

        let tail = Self::tail(&mut file, 2)
            .map_err(|e| Error::io(format!("Failed to read {}", self.path.display()), e))?;
        let ending: &[u8] = if tail.ends_with(b"\r\n") { b"\r\n" } else { b"\n" };

        let mut line = Vec::with_capacity(text.len() + 3);
        if !tail.is_empty() && !tail.ends_with(b"\n") {
            line.extend_from_slice(ending);
        }
        line.extend_from_slice(text.as_bytes());
        line.extend_from_slice(ending);

        // One write so a failure cannot leave half a terminator behind
        file.write_all(&line)
            .and_then(|_| file.flush())
            .map_err(|e| Error::io(format!("Failed to append to {}", self.path.display()), e))?;
        debug!("Appended a line to {}", self.path.display());
        Ok(())
    }

    fn tail(file: &mut File, max: u64) -> std::io::Result<Vec<u8>> {
        let len = file.metadata()?.len();
        let take = len.min(max);
        file.seek(SeekFrom::Start(len - take))?;
        let mut tail = Vec::with_capacity(take as usize);
        file.take(take).read_to_end(&mut tail)?;
        Ok(tail)
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    fn reader(&mut self) -> Result<&mut Peekable<Lines<BufReader<File>>>> {
        if !matches!(self.handle, Handle::Reading(_)) {
            self.close()?;
            let file = File::open(&self.path).map_err(|e| {
                Error::io(format!("File {} cannot be found", self.file_name()), e)
            })?;
            debug!("Opened {} for reading", self.path.display());
            self.handle = Handle::Reading(BufReader::new(file).lines().peekable());
        }

        match &mut self.handle {
            Handle::Reading(lines) => Ok(lines),
            _ => unreachable!("handle was just switched to reading"),
        }
    }

    fn writer(&mut self) -> Result<&mut BufWriter<File>> {
        if !matches!(self.handle, Handle::Writing(_)) {
            self.close()?;
            let file = File::create(&self.path).map_err(|e| {
                Error::io(format!("File {} cannot be found", self.file_name()), e)
            })?;
            debug!("Opened {} for writing", self.path.display());
            self.handle = Handle::Writing(BufWriter::new(file));
        }

        match &mut self.handle {
            Handle::Writing(writer) => Ok(writer),
            _ => unreachable!("handle was just switched to writing"),
        }
    }
}

impl LineSource for LineFile {
    fn has_line(&mut self) -> Result<bool> {
        Ok(self.reader()?.peek().is_some())
    }

    fn read_line(&mut self) -> Result<String> {
        match self.reader()?.next() {
            Some(line) => line.map_err(|e| Error::io("Failed to read line", e)),
            None => Err(Error::io(
                format!("No more lines in {}", self.file_name()),
                end_of_input(),
            )),
        }
    }
}

impl LineSink for LineFile {
    fn write(&mut self, text: &str) -> Result<()> {
        let writer = self.writer()?;
        writer
            .write_all(text.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| Error::io("Failed to write line", e))
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        let writer = self.writer()?;
        writer
            .write_all(text.as_bytes())
            .and_then(|_| writer.write_all(b"\n"))
            .and_then(|_| writer.flush())
            .map_err(|e| Error::io("Failed to write line", e))
    }
}

impl Drop for LineFile {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
