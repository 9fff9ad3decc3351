//! Growable in-memory sink, the writer's default backing.

use super::Sink;
use crate::stream::error::Result;

/// Owned, growable byte buffer with a write cursor.
///
/// Unlike [`SliceSink`](super::SliceSink) the buffer grows on demand, and
/// seeking past the current end then writing zero-fills the gap, matching
/// file semantics. This is the only backing whose full written byte sequence
/// can be materialized after the fact.
#[derive(Debug, Default)]
pub struct BufferSink {
    buf: Vec<u8>,
    pos: u64,
}

impl BufferSink {
    /// An empty buffer with the cursor at offset 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything committed so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the sink, returning the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Sink for BufferSink {
    fn position(&mut self) -> Result<u64> {
        Ok(self.pos)
    }

    fn seek_to(&mut self, offset: u64) -> Result<()> {
        self.pos = offset;
        Ok(())
    }

    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize> {
        let start = self.pos as usize;
        if start > self.buf.len() {
            // Cursor was seeked past the end; zero-fill the gap.
            self.buf.resize(start, 0);
        }
        let end = start + buf.len();
        if end > self.buf.len() {
            self.buf.resize(end, 0);
        }
        self.buf[start..end].copy_from_slice(buf);
        self.pos = end as u64;
        Ok(buf.len())
    }

    fn len(&mut self) -> Result<u64> {
        Ok(self.buf.len() as u64)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
