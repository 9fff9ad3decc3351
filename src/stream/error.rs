//! Custom error types for the binstream crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The backing file could not be opened at construction.
    ///
    /// Surfaced immediately instead of degrading to an empty resource, so a
    /// missing or unreadable file is never mistaken for a zero-length one.
    #[error("cannot open {path:?} for {mode}: {source}")]
    Open {
        path: PathBuf,
        mode: &'static str,
        source: std::io::Error,
    },

    /// A read requested more bytes than the backing resource has left.
    #[error("truncated read: needed {needed} bytes at offset {offset}")]
    Truncated { needed: usize, offset: u64 },

    /// A write ran past the end of a fixed-size memory region.
    #[error("write overflow: needed {needed} bytes at offset {offset}")]
    Overflow { needed: usize, offset: u64 },

    /// An alignment boundary of zero was passed to an align operation.
    #[error("alignment boundary must be nonzero")]
    InvalidAlignment,

    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` type alias using the crate's `StreamError` type.
pub type Result<T> = std::result::Result<T, StreamError>;
