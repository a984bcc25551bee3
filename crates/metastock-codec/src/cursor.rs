//! Bounds-checked little-endian reads over an in-memory file.

use byteorder::{ByteOrder, LittleEndian};
use metastock_types::DecodeError;

use crate::MBF_SIZE;

/// A read position over a byte buffer.
///
/// Seeking and skipping never fail; reading past the end returns
/// [`DecodeError::Truncated`].
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Total buffer length.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Moves to an absolute offset.
    pub const fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Advances by `n` bytes.
    pub const fn skip(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n);
    }

    /// Reads the next `n` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than `n` bytes remain.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(DecodeError::Truncated {
                offset: self.pos,
                needed: n,
                available: self.data.len(),
            })?;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Reads an unsigned byte.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] at end of buffer.
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    /// Reads a little-endian `u16`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than 2 bytes remain.
    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    /// Reads a little-endian `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than 4 bytes remain.
    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    /// Reads a 4-byte MBF value without converting it.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than 4 bytes remain.
    pub fn read_mbf_bytes(&mut self) -> Result<[u8; MBF_SIZE], DecodeError> {
        let mut raw = [0u8; MBF_SIZE];
        raw.copy_from_slice(self.take(MBF_SIZE)?);
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_reads() {
        let data = [0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_u8().unwrap(), 1);
        assert_eq!(cursor.read_u16().unwrap(), 0x1234);
        assert_eq!(cursor.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(cursor.position(), 7);
    }

    #[test]
    fn test_skip_past_end_fails_on_read() {
        let data = [0u8; 4];
        let mut cursor = ByteCursor::new(&data);
        cursor.skip(10);
        assert_eq!(
            cursor.read_u8(),
            Err(DecodeError::Truncated {
                offset: 10,
                needed: 1,
                available: 4,
            })
        );
    }

    #[test]
    fn test_short_read() {
        let data = [0u8; 3];
        let mut cursor = ByteCursor::new(&data);
        cursor.seek(2);
        assert!(matches!(
            cursor.read_u16(),
            Err(DecodeError::Truncated { needed: 2, .. })
        ));
        // A failed read leaves the position unchanged.
        assert_eq!(cursor.position(), 2);
    }
}
