//! Error types.
//!
//! Every public operation fails with a single kind of error, [`ErrorKind::Io`].
//! The [`Error`] carries the offending path and wraps the underlying cause
//! ([`FrameError`]) so callers see both in one message.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of an [`Error`]. There is only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
}

/// An I/O failure with the path it happened on.
#[derive(Error, Debug)]
pub enum Error {
    /// The file is missing, unreadable, or malformed.
    #[error("Error reading CSV file at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: FrameError,
    },

    /// The file could not be created or written (permissions, missing
    /// directory, disk space).
    #[error("Failed to write submission to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: FrameError,
    },
}

impl Error {
    pub(crate) fn read(path: &Path, source: impl Into<FrameError>) -> Self {
        Error::Read {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub(crate) fn write(path: &Path, source: impl Into<FrameError>) -> Self {
        Error::Write {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Io
    }

    /// The path the failed operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            Error::Read { path, .. } | Error::Write { path, .. } => path,
        }
    }
}

/// The underlying cause of a failed read or write, or of an invalid frame.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    /// The input has no header and no data.
    #[error("no columns to parse from file")]
    NoColumns,

    /// A data row with more fields than the header.
    #[error("row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A requested column does not exist.
    #[error("column '{0}' not found")]
    UnknownColumn(String),

    /// Columns of a frame must all have the same length.
    #[error("column '{column}' has {found} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
}
