//! Path and CSV I/O helpers for tabular prediction competitions.
//!
//! ```no_run
//! use subio::{build_paths, read_csv, write_submission, ReadOptions};
//!
//! # fn main() -> subio::Result<()> {
//! let paths = build_paths("data");
//! let test = read_csv(&paths.test, &ReadOptions::default())?;
//! write_submission(&test, &paths.submission)?;
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod paths;

pub use data::loader::{read_csv, read_sample_submission};
pub use data::model::{Column, DType, Frame, Value};
pub use data::options::ReadOptions;
pub use data::writer::{write_frame, write_submission};
pub use error::{Error, ErrorKind, FrameError, Result};
pub use paths::{build_paths, PathSet};
