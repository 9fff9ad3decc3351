//! # binstream
//!
//! A dual-mode binary data access layer: a [`Reader`] and a [`Writer`] that
//! expose the same ordered, cursor-based API over either a file on disk or a
//! caller-supplied memory region. Format parsers and encoders built on top
//! never need to know which backing they are driving.
//!
//! Multi-byte values use the host's native byte order.
//!
//! ```
//! use binstream::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.write_u32(0xC0FFEE)?;
//! writer.write_cstring("header")?;
//!
//! let bytes = writer.into_bytes();
//! let mut reader = Reader::from_slice(&bytes);
//! assert_eq!(reader.read_u32()?, 0xC0FFEE);
//! assert_eq!(reader.read_cstring()?, "header");
//! # Ok::<(), binstream::StreamError>(())
//! ```
pub mod stream;

// Re-export the main types for convenience
pub use stream::{
    align::padding_for,
    backing::{BufferSink, FileSink, FileSource, Sink, SliceSink, SliceSource, Source},
    error::{Result, StreamError},
    read_all_bytes,
    reader::Reader,
    writer::Writer,
};
