//! Non-owning memory-region adapters.
//!
//! These bridge a caller-supplied byte slice into the same addressable
//! contract as a file stream, without copying the region into an owned
//! container. The slice stays owned by the caller; the borrow carried by the
//! view keeps it from outliving the underlying bytes.

use super::{Sink, Source};
use crate::stream::error::Result;

/// Read view over a borrowed byte region.
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: u64,
}

impl<'a> SliceSource<'a> {
    /// Wraps `bytes` with the cursor at offset 0.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl Source for SliceSource<'_> {
    fn position(&mut self) -> Result<u64> {
        Ok(self.pos)
    }

    fn seek_to(&mut self, offset: u64) -> Result<()> {
        self.pos = offset;
        Ok(())
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        let start = self.pos.min(self.bytes.len() as u64) as usize;
        let available = &self.bytes[start..];
        let count = available.len().min(buf.len());
        buf[..count].copy_from_slice(&available[..count]);
        self.pos = (start + count) as u64;
        Ok(count)
    }

    fn len(&mut self) -> Result<u64> {
        Ok(self.bytes.len() as u64)
    }
}

/// Write view over a borrowed mutable byte region.
///
/// The region is fixed-size: writes are clipped at its end, and the writer
/// above turns the resulting short count into an overflow error.
pub struct SliceSink<'a> {
    bytes: &'a mut [u8],
    pos: u64,
}

impl<'a> SliceSink<'a> {
    /// Wraps `bytes` with the cursor at offset 0.
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl Sink for SliceSink<'_> {
    fn position(&mut self) -> Result<u64> {
        Ok(self.pos)
    }

    fn seek_to(&mut self, offset: u64) -> Result<()> {
        self.pos = offset;
        Ok(())
    }

    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize> {
        let start = self.pos.min(self.bytes.len() as u64) as usize;
        let room = &mut self.bytes[start..];
        let count = room.len().min(buf.len());
        room[..count].copy_from_slice(&buf[..count]);
        self.pos = (start + count) as u64;
        Ok(count)
    }

    fn len(&mut self) -> Result<u64> {
        Ok(self.bytes.len() as u64)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
