//! Cursor alignment arithmetic shared by the reader and writer.

use super::error::{Result, StreamError};

/// Number of padding bytes between `position` and the next multiple of
/// `alignment`. Returns 0 when the position is already aligned.
///
/// Pure arithmetic; no backing is touched. The reader skips this many bytes
/// and the writer emits this many null bytes to land on the boundary.
///
/// # Errors
/// Returns [`StreamError::InvalidAlignment`] if `alignment` is zero.
pub fn padding_for(position: u64, alignment: u64) -> Result<u64> {
    if alignment == 0 {
        return Err(StreamError::InvalidAlignment);
    }
    let remainder = position % alignment;
    if remainder > 0 {
        Ok(alignment - remainder)
    } else {
        Ok(0)
    }
}
