//! Cursor-based binary decoding over any [`Source`] backing.

use std::path::Path;

use byteorder::{ByteOrder, NativeEndian};
use log::{debug, warn};

use super::align;
use super::backing::{FileSource, SliceSource, Source};
use super::error::{Result, StreamError};

/// Multi-byte fields use the host's native byte order throughout the crate.
type Endian = NativeEndian;

/// Cursor-based binary decoder bound to a file or memory backing.
///
/// Every decode operation consumes exactly its width in bytes and advances
/// the cursor by the same amount. Reading past the end of the backing yields
/// [`StreamError::Truncated`] rather than zeroed or partial data. The backing
/// is chosen once at construction; code that should work over either kind
/// takes `Reader<S: Source>` (or a boxed source) and never branches on it.
pub struct Reader<S> {
    source: S,
}

impl Reader<FileSource> {
    /// Opens the file at `path` for reading.
    ///
    /// # Errors
    /// Returns [`StreamError::Open`] if the file is missing or unreadable.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            source: FileSource::open(path)?,
        })
    }
}

impl<'a> Reader<SliceSource<'a>> {
    /// Reads from a caller-owned byte region without copying it.
    ///
    /// The region must outlive the reader; the borrow enforces this.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self {
            source: SliceSource::new(bytes),
        }
    }
}

impl<S: Source> Reader<S> {
    /// Wraps any custom [`Source`] backing.
    pub fn from_source(source: S) -> Self {
        Self { source }
    }

    /// Fills `buf` completely from the cursor or fails with `Truncated`.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            let count = self.source.read_bytes(&mut buf[filled..])?;
            if count == 0 {
                let offset = self.source.position()?.saturating_sub(filled as u64);
                return Err(StreamError::Truncated {
                    needed: buf.len(),
                    offset,
                });
            }
            filled += count;
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.fill(&mut buf)?;
        Ok(buf[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf)?;
        Ok(Endian::read_u16(&buf))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(Endian::read_u32(&buf))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(Endian::read_u64(&buf))
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf)?;
        Ok(Endian::read_i16(&buf))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(Endian::read_i32(&buf))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(Endian::read_i64(&buf))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(Endian::read_f32(&buf))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(Endian::read_f64(&buf))
    }

    /// Reads single bytes up to and through a null terminator.
    ///
    /// The terminator is consumed but excluded from the result. Bytes that do
    /// not form valid UTF-8 are replaced rather than rejected.
    pub fn read_cstring(&mut self) -> Result<String> {
        let mut raw = Vec::new();
        loop {
            let byte = self.read_u8()?;
            if byte == 0 {
                break;
            }
            raw.push(byte);
        }
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    /// Reads two-byte code units up to and through a null terminator.
    ///
    /// The 2-byte terminator is consumed but excluded from the result.
    pub fn read_wcstring(&mut self) -> Result<String> {
        let mut units = Vec::new();
        loop {
            let unit = self.read_u16()?;
            if unit == 0 {
                break;
            }
            units.push(unit);
        }
        Ok(String::from_utf16_lossy(&units))
    }

    /// Reads exactly `length` single-byte characters, no terminator handling.
    pub fn read_fixed_string(&mut self, length: usize) -> Result<String> {
        let raw = self.read_bytes(length)?;
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    /// Reads exactly `length` two-byte characters, no terminator handling.
    pub fn read_fixed_wstring(&mut self, length: usize) -> Result<String> {
        let mut units = Vec::with_capacity(length);
        for _ in 0..length {
            units.push(self.read_u16()?);
        }
        Ok(String::from_utf16_lossy(&units))
    }

    /// Decodes the null-terminated strings packed into the next `list_size`
    /// bytes, returning them in order.
    ///
    /// Some producers pad entries with extra null bytes to align the next
    /// one; after each string any run of null bytes is skipped one at a time
    /// until a non-null byte appears or `list_size` bytes have been consumed.
    /// Padding is discarded, not represented in the result.
    pub fn read_string_list(&mut self, list_size: u64) -> Result<Vec<String>> {
        let mut strings = Vec::new();
        if list_size == 0 {
            return Ok(strings);
        }

        let start = self.position()?;
        while self.position()? - start < list_size {
            strings.push(self.read_cstring()?);
            while self.position()? - start < list_size {
                if self.peek_u8()? == 0 {
                    self.skip(1)?;
                } else {
                    break;
                }
            }
        }

        let consumed = self.position()? - start;
        if consumed > list_size {
            warn!(
                "String list overran its declared {} bytes by {}",
                list_size,
                consumed - list_size
            );
        }
        debug!(
            "Decoded {} strings from a {}-byte list",
            strings.len(),
            list_size
        );
        Ok(strings)
    }

    /// Decodes the next byte without moving the cursor.
    pub fn peek_u8(&mut self) -> Result<u8> {
        let saved = self.source.position()?;
        let value = self.read_u8();
        self.source.seek_to(saved)?;
        value
    }

    /// Decodes the next two-byte value without moving the cursor.
    pub fn peek_u16(&mut self) -> Result<u16> {
        let saved = self.source.position()?;
        let value = self.read_u16();
        self.source.seek_to(saved)?;
        value
    }

    /// Decodes the next four-byte value without moving the cursor.
    pub fn peek_u32(&mut self) -> Result<u32> {
        let saved = self.source.position()?;
        let value = self.read_u32();
        self.source.seek_to(saved)?;
        value
    }

    /// Reads `count` raw bytes into a new vector.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; count];
        self.fill(&mut bytes)?;
        Ok(bytes)
    }

    /// Fills `destination` completely from the cursor.
    pub fn read_into(&mut self, destination: &mut [u8]) -> Result<()> {
        self.fill(destination)
    }

    /// Current cursor offset from the start of the backing.
    pub fn position(&mut self) -> Result<u64> {
        self.source.position()
    }

    /// Moves the cursor to an absolute offset.
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        self.source.seek_to(offset)
    }

    /// Moves the cursor forward by `delta` bytes.
    pub fn seek_forward(&mut self, delta: u64) -> Result<()> {
        let pos = self.position()?;
        self.source.seek_to(pos + delta)
    }

    /// Moves the cursor backward by `delta` bytes, clamping at offset 0.
    pub fn seek_back(&mut self, delta: u64) -> Result<()> {
        let pos = self.position()?;
        self.source.seek_to(pos.saturating_sub(delta))
    }

    /// Moves the cursor forward past `count` bytes without decoding them.
    pub fn skip(&mut self, count: u64) -> Result<()> {
        self.seek_forward(count)
    }

    /// Skips forward to the next multiple of `boundary`, returning the number
    /// of padding bytes skipped (0 if already aligned).
    ///
    /// # Errors
    /// Returns [`StreamError::InvalidAlignment`] if `boundary` is zero.
    pub fn align(&mut self, boundary: u64) -> Result<u64> {
        let padding = align::padding_for(self.position()?, boundary)?;
        if padding > 0 {
            self.skip(padding)?;
        }
        Ok(padding)
    }

    /// Total size of the backing in bytes. The cursor is left where it was.
    pub fn len(&mut self) -> Result<u64> {
        self.source.len()
    }
}
