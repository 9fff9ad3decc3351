//! Cursor-based binary stream layer.
//!
//! # Module Organization
//!
//! - [`backing`]: the `Source`/`Sink` capability traits plus the per-backing
//!   adapters (file, borrowed slice, growable buffer)
//! - [`reader`]: [`Reader`], the cursor-based decoder
//! - [`writer`]: [`Writer`], the cursor-based encoder
//! - [`align`]: padding arithmetic shared by reader and writer
//! - [`error`]: [`StreamError`] and the crate [`Result`] alias
//!
//! # Architecture
//!
//! ```text
//! Reader<S: Source>          Writer<S: Sink>
//!        │                          │
//!        └────────┬─────────────────┘
//!                 ▼
//!        Source / Sink traits        ← backing::{Source, Sink}
//!        ┌────────┼─────────────┐
//!        ▼        ▼             ▼
//!   FileSource  SliceSource  BufferSink
//!   FileSink    SliceSink
//! ```

pub mod align;
pub mod backing;
pub mod error;
pub mod reader;
pub mod writer;

use std::path::Path;

pub use backing::{BufferSink, FileSink, FileSource, Sink, SliceSink, SliceSource, Source};
pub use error::{Result, StreamError};
pub use reader::Reader;
pub use writer::Writer;

/// Reads the entire file at `path` into an owned byte vector.
///
/// Convenience for callers that want a region-backed [`Reader`] over an owned
/// copy of a file instead of streaming it:
///
/// ```no_run
/// # use binstream::{read_all_bytes, Reader};
/// let bytes = read_all_bytes("data.bin")?;
/// let mut reader = Reader::from_slice(&bytes);
/// # Ok::<(), binstream::StreamError>(())
/// ```
///
/// # Errors
/// Returns [`StreamError::Open`] if the file is missing or unreadable.
pub fn read_all_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|source| StreamError::Open {
        path: path.to_path_buf(),
        mode: "reading",
        source,
    })
}
