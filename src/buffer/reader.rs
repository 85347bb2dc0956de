//! Consuming read cursor over `bytes::Bytes`.

use bytes::Bytes;

use crate::error::{LedgerwireError, Result};

/// Read cursor for decoding messages.
///
/// Holds the whole input as `Bytes` plus a position, so byte-run reads are
/// zero-copy slices of the input. Every read checks the remaining length
/// before advancing; a failed read does not move the cursor.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use ledgerwire::buffer::Reader;
///
/// let mut r = Reader::new(Bytes::from_static(&[3, b'a', b'b', b'c']));
/// assert_eq!(&r.read_bytes_lp8().unwrap()[..], b"abc");
/// assert_eq!(r.position(), 4);
/// r.finish().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Reader {
    buf: Bytes,
    pos: usize,
}

impl Reader {
    /// Create a reader over the given bytes, positioned at the start.
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self {
            buf: buf.into(),
            pos: 0,
        }
    }

    /// Current read position in bytes from the start of the buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Fail unless the buffer has been consumed exactly.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerwireError::TrailingData`] if unread bytes remain.
    pub fn finish(&self) -> Result<()> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(LedgerwireError::TrailingData { remaining }),
        }
    }

    fn check(&self, needed: usize) -> Result<()> {
        if self.remaining() < needed {
            return Err(LedgerwireError::Underrun {
                needed,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Read a single unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        self.check(1)?;
        let value = self.buf[self.pos];
        self.pos += 1;
        Ok(value)
    }

    /// Read an unsigned 16-bit integer (Big Endian).
    pub fn read_u16(&mut self) -> Result<u16> {
        self.check(2)?;
        let value = u16::from_be_bytes([self.buf[self.pos], self.buf[self.pos + 1]]);
        self.pos += 2;
        Ok(value)
    }

    /// Read an unsigned 64-bit integer (Big Endian).
    pub fn read_u64(&mut self) -> Result<u64> {
        self.check(8)?;
        let mut be = [0u8; 8];
        be.copy_from_slice(&self.buf[self.pos..self.pos + 8]);
        self.pos += 8;
        Ok(u64::from_be_bytes(be))
    }

    /// Read a bool: one byte, 0 = false, nonzero = true.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read exactly `n` raw bytes (zero-copy slice of the input).
    pub fn read_bytes_fixed(&mut self, n: usize) -> Result<Bytes> {
        self.check(n)?;
        let slice = self.buf.slice(self.pos..self.pos + n);
        self.pos += n;
        Ok(slice)
    }

    /// Read a length-prefixed byte run: one length byte, then that many bytes.
    pub fn read_bytes_lp8(&mut self) -> Result<Bytes> {
        let len = self.read_u8()? as usize;
        // Roll back over the length byte so a truncated body reports the
        // whole field, not just its tail.
        match self.read_bytes_fixed(len) {
            Ok(bytes) => Ok(bytes),
            Err(e) => {
                self.pos -= 1;
                Err(e)
            }
        }
    }

    /// Read a length-prefixed UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerwireError::InvalidUtf8`] if the bytes are not valid
    /// UTF-8, alongside the usual underrun error on a short buffer.
    pub fn read_string_lp8(&mut self, field: &'static str) -> Result<String> {
        let bytes = self.read_bytes_lp8()?;
        String::from_utf8(bytes.to_vec()).map_err(|_| LedgerwireError::InvalidUtf8 { field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Writer;

    #[test]
    fn test_read_integers_big_endian() {
        let mut r = Reader::new(Bytes::from_static(&[
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
        ]));
        assert_eq!(r.read_u8().unwrap(), 0x01);
        assert_eq!(r.read_u16().unwrap(), 0x0203);
        assert_eq!(r.read_u64().unwrap(), 0x0405060708090A0B);
        assert_eq!(r.position(), 11);
        r.finish().unwrap();
    }

    #[test]
    fn test_read_bool_nonzero_is_true() {
        let mut r = Reader::new(Bytes::from_static(&[0, 1, 0xFF]));
        assert!(!r.read_bool().unwrap());
        assert!(r.read_bool().unwrap());
        assert!(r.read_bool().unwrap());
    }

    #[test]
    fn test_underrun_does_not_advance() {
        let mut r = Reader::new(Bytes::from_static(&[0x01, 0x02]));
        let err = r.read_u64().unwrap_err();
        assert_eq!(
            err,
            LedgerwireError::Underrun {
                needed: 8,
                remaining: 2,
            }
        );
        assert_eq!(r.position(), 0);
        // The two bytes are still readable.
        assert_eq!(r.read_u16().unwrap(), 0x0102);
    }

    #[test]
    fn test_lp8_round_trip() {
        let mut w = Writer::new();
        w.write_bytes_lp8("uuid", b"hello").unwrap();
        let mut r = Reader::new(w.freeze());
        assert_eq!(&r.read_bytes_lp8().unwrap()[..], b"hello");
        r.finish().unwrap();
    }

    #[test]
    fn test_lp8_truncated_body_is_underrun() {
        // Length byte claims 5, only 2 bytes follow.
        let mut r = Reader::new(Bytes::from_static(&[5, b'h', b'i']));
        let err = r.read_bytes_lp8().unwrap_err();
        assert_eq!(
            err,
            LedgerwireError::Underrun {
                needed: 5,
                remaining: 2,
            }
        );
        assert_eq!(r.position(), 0);
    }

    #[test]
    fn test_string_invalid_utf8_rejected() {
        let mut r = Reader::new(Bytes::from_static(&[2, 0xFF, 0xFE]));
        let err = r.read_string_lp8("currency").unwrap_err();
        assert_eq!(err, LedgerwireError::InvalidUtf8 { field: "currency" });
    }

    #[test]
    fn test_fixed_read_is_zero_copy() {
        let input = Bytes::from_static(b"0123456789");
        let mut r = Reader::new(input.clone());
        let head = r.read_bytes_fixed(4).unwrap();
        assert_eq!(head.as_ptr(), input.as_ptr());
        assert_eq!(&head[..], b"0123");
    }

    #[test]
    fn test_finish_reports_trailing() {
        let mut r = Reader::new(Bytes::from_static(&[1, 2, 3]));
        r.read_u8().unwrap();
        let err = r.finish().unwrap_err();
        assert_eq!(err, LedgerwireError::TrailingData { remaining: 2 });
    }
}
