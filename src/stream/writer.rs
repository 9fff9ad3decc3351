//! Cursor-based binary encoding over any [`Sink`] backing.

use std::path::Path;

use byteorder::{ByteOrder, NativeEndian};

use super::align;
use super::backing::{BufferSink, FileSink, Sink, SliceSink};
use super::error::{Result, StreamError};

/// Multi-byte fields use the host's native byte order throughout the crate.
type Endian = NativeEndian;

/// Cursor-based binary encoder bound to a file, a fixed memory region, or an
/// owned growable buffer.
///
/// Mirrors the primitive set of [`Reader`](super::reader::Reader): every
/// encode operation serializes the value's raw byte representation and
/// advances the cursor by its width. The written bytes can be materialized
/// only when the backing is the growable buffer; `bytes`/`into_bytes` exist
/// solely on `Writer<BufferSink>`, so asking a file-backed writer for its
/// buffer is a compile error rather than an empty answer.
pub struct Writer<S> {
    sink: S,
}

impl Writer<BufferSink> {
    /// In-memory writer over an empty growable buffer.
    pub fn new() -> Self {
        Self {
            sink: BufferSink::new(),
        }
    }

    /// Everything written so far.
    pub fn bytes(&self) -> &[u8] {
        self.sink.as_bytes()
    }

    /// Consumes the writer, returning the full written byte sequence.
    pub fn into_bytes(self) -> Vec<u8> {
        self.sink.into_bytes()
    }
}

impl Default for Writer<BufferSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer<FileSink> {
    /// Opens `path` for writing, clearing any existing contents.
    ///
    /// # Errors
    /// Returns [`StreamError::Open`] if the file cannot be created or written.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            sink: FileSink::create(path)?,
        })
    }

    /// Opens `path` for writing, keeping existing contents in place.
    ///
    /// # Errors
    /// Returns [`StreamError::Open`] if the file cannot be created or written.
    pub fn update(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            sink: FileSink::update(path)?,
        })
    }
}

impl<'a> Writer<SliceSink<'a>> {
    /// Writes into a caller-owned fixed-size region.
    ///
    /// Writing past the end of the region fails with
    /// [`StreamError::Overflow`].
    pub fn from_slice_mut(bytes: &'a mut [u8]) -> Self {
        Self {
            sink: SliceSink::new(bytes),
        }
    }
}

impl<S: Sink> Writer<S> {
    /// Wraps any custom [`Sink`] backing.
    pub fn from_sink(sink: S) -> Self {
        Self { sink }
    }

    /// Commits `bytes` fully or fails with `Overflow`.
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        let mut written = 0;
        while written < bytes.len() {
            let count = self.sink.write_bytes(&bytes[written..])?;
            if count == 0 {
                let offset = self.sink.position()?.saturating_sub(written as u64);
                return Err(StreamError::Overflow {
                    needed: bytes.len(),
                    offset,
                });
            }
            written += count;
        }
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.put(&[value])
    }

    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        let mut buf = [0u8; 2];
        Endian::write_u16(&mut buf, value);
        self.put(&buf)
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        let mut buf = [0u8; 4];
        Endian::write_u32(&mut buf, value);
        self.put(&buf)
    }

    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        let mut buf = [0u8; 8];
        Endian::write_u64(&mut buf, value);
        self.put(&buf)
    }

    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.put(&[value as u8])
    }

    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        let mut buf = [0u8; 2];
        Endian::write_i16(&mut buf, value);
        self.put(&buf)
    }

    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        let mut buf = [0u8; 4];
        Endian::write_i32(&mut buf, value);
        self.put(&buf)
    }

    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        let mut buf = [0u8; 8];
        Endian::write_i64(&mut buf, value);
        self.put(&buf)
    }

    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        let mut buf = [0u8; 4];
        Endian::write_f32(&mut buf, value);
        self.put(&buf)
    }

    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        let mut buf = [0u8; 8];
        Endian::write_f64(&mut buf, value);
        self.put(&buf)
    }

    /// Writes the string's bytes followed by a null terminator.
    pub fn write_cstring(&mut self, value: &str) -> Result<()> {
        self.put(value.as_bytes())?;
        self.write_u8(0)
    }

    /// Writes the string's bytes without a terminator.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.put(value.as_bytes())
    }

    /// Writes `count` raw bytes from `bytes`.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.put(bytes)
    }

    /// Writes `value` as its raw in-memory byte representation.
    ///
    /// `T: NoUninit` restricts this to plain value data. References and raw
    /// pointers do not implement `NoUninit`, so accidentally serializing an
    /// address instead of the bytes it points to fails to compile.
    pub fn write_value<T: bytemuck::NoUninit>(&mut self, value: &T) -> Result<()> {
        self.put(bytemuck::bytes_of(value))
    }

    /// Writes `count` null bytes.
    pub fn write_zeros(&mut self, count: u64) -> Result<()> {
        const ZEROS: [u8; 512] = [0u8; 512];
        let mut remaining = count;
        while remaining > 0 {
            let chunk = remaining.min(ZEROS.len() as u64) as usize;
            self.put(&ZEROS[..chunk])?;
            remaining -= chunk as u64;
        }
        Ok(())
    }

    /// Current cursor offset from the start of the backing.
    pub fn position(&mut self) -> Result<u64> {
        self.sink.position()
    }

    /// Moves the cursor to an absolute offset.
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        self.sink.seek_to(offset)
    }

    /// Moves the cursor forward by `delta` bytes.
    pub fn seek_forward(&mut self, delta: u64) -> Result<()> {
        let pos = self.position()?;
        self.sink.seek_to(pos + delta)
    }

    /// Moves the cursor forward past `count` bytes without writing them.
    ///
    /// On growable backings the gap is zero-filled when a later write commits
    /// past it; use [`write_zeros`](Self::write_zeros) to fill it eagerly.
    pub fn skip(&mut self, count: u64) -> Result<()> {
        self.seek_forward(count)
    }

    /// Pads with null bytes to the next multiple of `boundary`, returning the
    /// number of padding bytes written (0 if already aligned).
    ///
    /// The pure padding computation is [`align::padding_for`], shared with
    /// the reader.
    ///
    /// # Errors
    /// Returns [`StreamError::InvalidAlignment`] if `boundary` is zero.
    pub fn align(&mut self, boundary: u64) -> Result<u64> {
        let padding = align::padding_for(self.position()?, boundary)?;
        if padding > 0 {
            self.write_zeros(padding)?;
        }
        Ok(padding)
    }

    /// Current total size of the backing in bytes (the high-water mark of
    /// committed bytes for files and growable buffers).
    pub fn len(&mut self) -> Result<u64> {
        self.sink.len()
    }

    /// Forces any buffered bytes out to the durable backing. No-op for
    /// memory backings.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()
    }
}
