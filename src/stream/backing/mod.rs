//! Backing resource adapters.
//!
//! This module defines the minimal capability contract that lets the reader
//! and writer treat a file on disk and a caller-supplied memory region
//! identically:
//!
//! - [`Source`] / [`Sink`]: position query, absolute seek, and sequential
//!   transfer of a requested byte count, clipped to the resource bounds.
//! - [`FileSource`] / [`FileSink`]: buffered file streams.
//! - [`SliceSource`] / [`SliceSink`]: non-owning views over borrowed slices.
//! - [`BufferSink`]: an owned growable buffer, the writer's default backing.
//!
//! Each backing kind implements the contract exactly once; nothing above
//! this layer branches on the backing kind.

mod buffer;
mod file;
mod region;

pub use buffer::BufferSink;
pub use file::{FileSink, FileSource};
pub use region::{SliceSink, SliceSource};

use super::error::Result;

/// Byte-source half of the backing contract.
///
/// A `Source` is an addressable run of bytes with a single cursor. Reads are
/// clipped to the resource bounds; detecting a short read and turning it into
/// an error is the reader's job, not the backing's.
pub trait Source {
    /// Current cursor offset from the start of the resource.
    fn position(&mut self) -> Result<u64>;

    /// Moves the cursor to an absolute offset. Seeking past the end is
    /// allowed; subsequent reads there return no bytes.
    fn seek_to(&mut self, offset: u64) -> Result<()>;

    /// Reads up to `buf.len()` bytes at the cursor and advances it by the
    /// number of bytes copied. May return fewer bytes than requested even
    /// before the end of the resource; returns 0 only at the end.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Total resource size in bytes. Leaves the cursor where it was.
    fn len(&mut self) -> Result<u64>;
}

/// Byte-sink half of the backing contract.
///
/// Mirrors [`Source`] for writes. Fixed-size backings clip writes at their
/// end; growable backings never clip.
pub trait Sink {
    /// Current cursor offset from the start of the resource.
    fn position(&mut self) -> Result<u64>;

    /// Moves the cursor to an absolute offset. Seeking past the current end
    /// of a growable backing is allowed; the gap is zero-filled when the
    /// next write commits.
    fn seek_to(&mut self, offset: u64) -> Result<()>;

    /// Writes up to `buf.len()` bytes at the cursor and advances it by the
    /// number of bytes committed. Returns 0 only when a fixed-size backing
    /// has no room left.
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize>;

    /// Current total size of the backing in bytes (for files and growable
    /// buffers, the high-water mark of committed bytes).
    fn len(&mut self) -> Result<u64>;

    /// Forces any buffered bytes out to the durable backing. No-op for
    /// memory backings.
    fn flush(&mut self) -> Result<()>;
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn position(&mut self) -> Result<u64> {
        (**self).position()
    }

    fn seek_to(&mut self, offset: u64) -> Result<()> {
        (**self).seek_to(offset)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read_bytes(buf)
    }

    fn len(&mut self) -> Result<u64> {
        (**self).len()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn position(&mut self) -> Result<u64> {
        (**self).position()
    }

    fn seek_to(&mut self, offset: u64) -> Result<()> {
        (**self).seek_to(offset)
    }

    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize> {
        (**self).write_bytes(buf)
    }

    fn len(&mut self) -> Result<u64> {
        (**self).len()
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
