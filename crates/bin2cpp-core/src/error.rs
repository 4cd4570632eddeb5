//! Error types for the bin2cpp-core library.
//!
//! Every failure of a generation request is reported through [`Error`].
//! Encoding itself cannot fail: every byte value has a literal spelling, so
//! there is no variant for it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bin2cpp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all generation operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The request was rejected before any file was touched
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What is wrong with the request
        reason: String,
    },

    /// The input file could not be opened for reading
    #[error("input file '{path}' is unavailable: {source}")]
    InputUnavailable {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be opened for writing
    #[error("output file '{path}' is not writable: {source}")]
    OutputUnwritable {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading the input failed after it was opened
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing an output failed after it was opened
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input changed length while it was being streamed
    #[error("input file '{path}' changed during generation: expected {expected} bytes, read {actual}")]
    SizeChanged {
        /// Path to the input file
        path: PathBuf,
        /// Length reported when the file was opened
        expected: u64,
        /// Number of bytes actually streamed
        actual: u64,
    },
}

impl Error {
    /// Creates a new configuration error
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Creates a new input unavailable error
    pub fn input_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Creates a new output unwritable error
    pub fn output_unwritable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputUnwritable {
            path: path.into(),
            source,
        }
    }

    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new file write error
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the request was rejected before touching the filesystem
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Returns true if an output file may have been left partially written
    pub fn may_leave_partial_output(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::SizeChanged { .. }
        )
    }
}
