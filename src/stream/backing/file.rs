//! File-backed source and sink adapters.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::info;

use super::{Sink, Source};
use crate::stream::error::{Result, StreamError};

/// Buffered read-only file stream.
pub struct FileSource {
    stream: BufReader<File>,
}

impl FileSource {
    /// Opens the file at `path` for reading.
    ///
    /// # Errors
    /// Returns [`StreamError::Open`] if the file is missing or unreadable.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StreamError::Open {
            path: path.to_path_buf(),
            mode: "reading",
            source,
        })?;
        info!("Opened {} for reading", path.display());
        Ok(Self {
            stream: BufReader::new(file),
        })
    }
}

impl Source for FileSource {
    fn position(&mut self) -> Result<u64> {
        Ok(self.stream.stream_position()?)
    }

    fn seek_to(&mut self, offset: u64) -> Result<()> {
        self.stream.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        loop {
            match self.stream.read(buf) {
                Ok(count) => return Ok(count),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn len(&mut self) -> Result<u64> {
        // Save position, seek to the end to learn the length, restore if moved.
        let current = self.stream.stream_position()?;
        let end = self.stream.seek(SeekFrom::End(0))?;
        if current != end {
            self.stream.seek(SeekFrom::Start(current))?;
        }
        Ok(end)
    }
}

/// Buffered writable file stream.
///
/// The internal buffer is flushed when the sink is dropped, but drop swallows
/// flush errors; call [`Sink::flush`] to observe them.
pub struct FileSink {
    stream: BufWriter<File>,
}

impl FileSink {
    /// Opens `path` for writing, clearing any existing contents.
    ///
    /// # Errors
    /// Returns [`StreamError::Open`] if the file cannot be created or written.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path.as_ref(), true)
    }

    /// Opens `path` for writing, keeping existing contents in place.
    ///
    /// # Errors
    /// Returns [`StreamError::Open`] if the file cannot be created or written.
    pub fn update(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path.as_ref(), false)
    }

    fn open_with(path: &Path, truncate: bool) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(truncate)
            .open(path)
            .map_err(|source| StreamError::Open {
                path: path.to_path_buf(),
                mode: "writing",
                source,
            })?;
        info!(
            "Opened {} for writing (truncate: {})",
            path.display(),
            truncate
        );
        Ok(Self {
            stream: BufWriter::new(file),
        })
    }
}

impl Sink for FileSink {
    fn position(&mut self) -> Result<u64> {
        Ok(self.stream.stream_position()?)
    }

    fn seek_to(&mut self, offset: u64) -> Result<()> {
        self.stream.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize> {
        loop {
            match self.stream.write(buf) {
                Ok(count) => return Ok(count),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn len(&mut self) -> Result<u64> {
        // Seeking flushes the internal buffer, so the end offset accounts for
        // every byte written so far.
        let current = self.stream.stream_position()?;
        let end = self.stream.seek(SeekFrom::End(0))?;
        if current != end {
            self.stream.seek(SeekFrom::Start(current))?;
        }
        Ok(end)
    }

    fn flush(&mut self) -> Result<()> {
        self.stream.flush()?;
        Ok(())
    }
}
