//! Growable write cursor backed by `bytes::BytesMut`.

use bytes::{BufMut, Bytes, BytesMut};

use super::LP8_MAX;
use crate::error::{LedgerwireError, Result};

/// Append-only byte cursor for encoding messages.
///
/// Fixed-size and length-prefixed writes validate their input before touching
/// the buffer, so a failed write leaves previously written bytes intact.
///
/// # Example
///
/// ```
/// use ledgerwire::buffer::Writer;
///
/// let mut w = Writer::new();
/// w.write_u8(7);
/// w.write_bytes_lp8("uuid", b"abc").unwrap();
/// assert_eq!(w.len(), 5);
/// ```
#[derive(Debug)]
pub struct Writer {
    buf: BytesMut,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Create a new writer with a small default capacity.
    pub fn new() -> Self {
        Self {
            buf: BytesMut::with_capacity(256),
        }
    }

    /// Create a new writer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Write a single unsigned byte.
    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    /// Write an unsigned 16-bit integer (Big Endian).
    #[inline]
    pub fn write_u16(&mut self, value: u16) {
        self.buf.put_u16(value);
    }

    /// Write an unsigned 64-bit integer (Big Endian).
    #[inline]
    pub fn write_u64(&mut self, value: u64) {
        self.buf.put_u64(value);
    }

    /// Write a bool as one byte (1 = true, 0 = false).
    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.buf.put_u8(value as u8);
    }

    /// Write exactly `expected` raw bytes, no length header.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerwireError::FixedSizeMismatch`] if `data` is not exactly
    /// `expected` bytes long.
    pub fn write_bytes_fixed(
        &mut self,
        field: &'static str,
        data: &[u8],
        expected: usize,
    ) -> Result<()> {
        if data.len() != expected {
            return Err(LedgerwireError::FixedSizeMismatch {
                field,
                expected,
                actual: data.len(),
            });
        }
        self.buf.put_slice(data);
        Ok(())
    }

    /// Write a length-prefixed byte run: one length byte, then the raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerwireError::OversizedField`] if `data` exceeds 255 bytes.
    pub fn write_bytes_lp8(&mut self, field: &'static str, data: &[u8]) -> Result<()> {
        if data.len() > LP8_MAX {
            return Err(LedgerwireError::OversizedField {
                field,
                len: data.len(),
            });
        }
        self.buf.put_u8(data.len() as u8);
        self.buf.put_slice(data);
        Ok(())
    }

    /// Write a length-prefixed UTF-8 string.
    ///
    /// The length prefix counts UTF-8 bytes, not characters.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerwireError::OversizedField`] if the UTF-8 encoding
    /// exceeds 255 bytes.
    pub fn write_string_lp8(&mut self, field: &'static str, value: &str) -> Result<()> {
        self.write_bytes_lp8(field, value.as_bytes())
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if nothing has been written yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer and return the encoded bytes (zero-copy freeze).
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_are_big_endian() {
        let mut w = Writer::new();
        w.write_u8(0x01);
        w.write_u16(0x0203);
        w.write_u64(0x0405060708090A0B);

        let bytes = w.freeze();
        assert_eq!(
            &bytes[..],
            &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B]
        );
    }

    #[test]
    fn test_bool_is_one_byte() {
        let mut w = Writer::new();
        w.write_bool(true);
        w.write_bool(false);
        assert_eq!(&w.freeze()[..], &[1, 0]);
    }

    #[test]
    fn test_fixed_exact_length_ok() {
        let mut w = Writer::new();
        w.write_bytes_fixed("signer", &[0xAA; 32], 32).unwrap();
        assert_eq!(w.len(), 32);
    }

    #[test]
    fn test_fixed_wrong_length_rejected() {
        let mut w = Writer::new();
        let err = w.write_bytes_fixed("signer", &[0xAA; 31], 32).unwrap_err();
        assert_eq!(
            err,
            LedgerwireError::FixedSizeMismatch {
                field: "signer",
                expected: 32,
                actual: 31,
            }
        );
        // Nothing written by the failed call.
        assert!(w.is_empty());
    }

    #[test]
    fn test_lp8_prefixes_length() {
        let mut w = Writer::new();
        w.write_bytes_lp8("uuid", b"abc").unwrap();
        assert_eq!(&w.freeze()[..], &[3, b'a', b'b', b'c']);
    }

    #[test]
    fn test_lp8_empty_is_single_zero_byte() {
        let mut w = Writer::new();
        w.write_bytes_lp8("uuid", b"").unwrap();
        assert_eq!(&w.freeze()[..], &[0]);
    }

    #[test]
    fn test_lp8_max_length_accepted() {
        let mut w = Writer::new();
        w.write_bytes_lp8("uuid", &[0x55; 255]).unwrap();
        assert_eq!(w.len(), 256);
    }

    #[test]
    fn test_lp8_oversized_rejected() {
        let mut w = Writer::new();
        let err = w.write_bytes_lp8("uuid", &[0x55; 256]).unwrap_err();
        assert_eq!(
            err,
            LedgerwireError::OversizedField {
                field: "uuid",
                len: 256,
            }
        );
        assert!(w.is_empty());
    }

    #[test]
    fn test_string_lp8_counts_utf8_bytes() {
        let mut w = Writer::new();
        w.write_string_lp8("currency", "€").unwrap();
        // U+20AC is 3 bytes in UTF-8.
        assert_eq!(&w.freeze()[..], &[3, 0xE2, 0x82, 0xAC]);
    }
}
