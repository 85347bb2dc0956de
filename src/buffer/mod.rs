//! Buffer module - byte cursors over `bytes` buffers.
//!
//! All multi-byte integers are Big Endian. Endianness is part of the wire
//! contract: both sides of the protocol must agree, and the golden fixtures
//! in the integration tests pin it.
//!
//! Primitive shapes:
//! - fixed-width unsigned integers (u8, u16, u64)
//! - fixed-size byte runs (no length header; exact length enforced)
//! - LP8 byte runs (one u8 length, then 0-255 raw bytes)
//! - LP8 UTF-8 strings (LP8 over the UTF-8 encoding)
//! - bool (one byte, 0 = false, 1 = true; any nonzero reads as true)
//!
//! # Example
//!
//! ```
//! use ledgerwire::buffer::{Reader, Writer};
//!
//! let mut w = Writer::new();
//! w.write_u64(5000);
//! w.write_string_lp8("currency", "USD").unwrap();
//!
//! let mut r = Reader::new(w.freeze());
//! assert_eq!(r.read_u64().unwrap(), 5000);
//! assert_eq!(r.read_string_lp8("currency").unwrap(), "USD");
//! r.finish().unwrap(); // no trailing bytes
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

/// Maximum byte length of a length-prefixed (LP8) field.
pub const LP8_MAX: usize = 255;
