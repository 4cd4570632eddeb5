//! Buffered output files.
//!
//! [`OutputFile`] owns the handle of one generated file. Write errors carry
//! the file path, [`OutputFile::finish`] flushes, and dropping the value on
//! any early return closes the handle.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// A generated file being written
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl OutputFile {
    /// Creates (or truncates) the file at `path`
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path).map_err(|e| Error::output_unwritable(&path, e))?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Converts an I/O error raised while writing into a path-carrying error
    pub fn write_error(&self, source: io::Error) -> Error {
        Error::file_write(&self.path, source)
    }

    /// Flushes buffered output and closes the file
    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::file_write(&self.path, e))
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_finish() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let mut out = OutputFile::create(&path).unwrap();
        write!(out, "hello {}", 42).unwrap();
        out.finish().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello 42");
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = OutputFile::create(dir.path().join("missing/out.txt")).unwrap_err();
        assert!(matches!(err, Error::OutputUnwritable { .. }));
    }
}
