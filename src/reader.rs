//! Primitive little-endian reads over the raw bytes of an `.nbs` file

use std::str;
use thiserror::Error;

/// A cursor for decoding fixed-width values from an in-memory byte buffer
///
/// All multi-byte integers in the NBS format are little-endian. The reader
/// keeps track of its position so that record decoders can consume their
/// fields back-to-back; every read checks the remaining length first, so a
/// truncated file surfaces as a [`ReadError`] instead of a panic.
pub(crate) struct Reader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// The offset of the next read, from the start of the buffer
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Consume `count` bytes, or fail without advancing
    fn take(&mut self, count: usize) -> Result<&'a [u8], ReadError> {
        let end = match self.position.checked_add(count) {
            Some(end) if end <= self.bytes.len() => end,
            _ => {
                return Err(ReadError::TruncatedBuffer {
                    offset: self.position,
                    requested: count,
                });
            }
        };

        let bytes = &self.bytes[self.position..end];
        self.position = end;

        Ok(bytes)
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, ReadError> {
        Ok(self.take(1)?[0])
    }

    pub(crate) fn read_i8(&mut self) -> Result<i8, ReadError> {
        Ok(self.read_u8()? as i8)
    }

    pub(crate) fn read_i16(&mut self) -> Result<i16, ReadError> {
        let bytes = self.take(2)?;
        Ok(i16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub(crate) fn read_i32(&mut self) -> Result<i32, ReadError> {
        let bytes = self.take(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a length-prefixed UTF-8 string
    ///
    /// Strings are stored as a signed 32-bit byte length followed by that
    /// many bytes of UTF-8 text.
    pub(crate) fn read_string(&mut self) -> Result<String, ReadError> {
        let offset = self.position();
        let length = self.read_i32()?;
        let length = usize::try_from(length)
            .map_err(|_| ReadError::NegativeStringLength { offset, length })?;

        let offset = self.position();
        match str::from_utf8(self.take(length)?) {
            Ok(str) => Ok(str.to_owned()),
            Err(source) => Err(ReadError::InvalidUtf8 { offset, source }),
        }
    }
}

/// Errors that might occur while reading values from the byte buffer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadError {
    /// A read would have gone past the end of the buffer
    #[error("Reading {requested} byte(s) at offset {offset} goes past the end of the buffer")]
    TruncatedBuffer {
        /// The offset the read started at
        offset: usize,

        /// The number of bytes the read asked for
        requested: usize,
    },

    /// A string field declared a negative byte length
    #[error("The string at offset {offset} declares a negative length ({length})")]
    NegativeStringLength {
        /// The offset of the length prefix
        offset: usize,

        /// The declared length
        length: i32,
    },

    /// The bytes of a string field are not valid UTF-8
    #[error("The string at offset {offset} is not valid UTF-8")]
    InvalidUtf8 {
        /// The offset of the first string byte
        offset: usize,

        /// The underlying UTF-8 error
        source: str::Utf8Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives() {
        let mut reader = Reader::new(&[0xFF, 0x80, 0x34, 0x12, 0xFE, 0xFF, 0xFF, 0xFF]);

        assert_eq!(reader.read_u8(), Ok(0xFF));
        assert_eq!(reader.read_i8(), Ok(-128));
        assert_eq!(reader.read_i16(), Ok(0x1234));
        assert_eq!(reader.read_i32(), Ok(-2));
        assert_eq!(reader.position(), 8);
    }

    #[test]
    fn read_past_end() {
        let mut reader = Reader::new(&[0x01]);

        assert_eq!(
            reader.read_i16(),
            Err(ReadError::TruncatedBuffer {
                offset: 0,
                requested: 2
            })
        );

        // A failed read does not advance the cursor
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_u8(), Ok(0x01));
    }

    #[test]
    fn string() {
        let mut reader = Reader::new(b"\x05\x00\x00\x00hello\x2A");

        assert_eq!(reader.read_string().as_deref(), Ok("hello"));
        assert_eq!(reader.read_u8(), Ok(0x2A));
    }

    #[test]
    fn empty_string() {
        let mut reader = Reader::new(&[0, 0, 0, 0]);

        assert_eq!(reader.read_string().as_deref(), Ok(""));
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn string_cut_off() {
        // Declares 10 bytes of text, but only 2 remain
        let mut reader = Reader::new(b"\x0A\x00\x00\x00ab");

        assert_eq!(
            reader.read_string(),
            Err(ReadError::TruncatedBuffer {
                offset: 4,
                requested: 10
            })
        );
    }

    #[test]
    fn string_negative_length() {
        let mut reader = Reader::new(&[0xFF, 0xFF, 0xFF, 0xFF]);

        assert_eq!(
            reader.read_string(),
            Err(ReadError::NegativeStringLength {
                offset: 0,
                length: -1
            })
        );
    }

    #[test]
    fn string_invalid_utf8() {
        let mut reader = Reader::new(&[2, 0, 0, 0, 0xC3, 0x28]);

        assert!(matches!(
            reader.read_string(),
            Err(ReadError::InvalidUtf8 { offset: 4, .. })
        ));
    }
}
