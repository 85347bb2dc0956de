//! Outcome messages - success and error notifications for a prior operation.
//!
//! `opcode` tags which logical operation the outcome refers to; it is
//! interpreted by the dispatching layer above this crate, which also owns
//! any opcode-prefixed framing.

use bytes::Bytes;

use super::WireMessage;
use crate::buffer::{Reader, Writer};
use crate::error::Result;

/// An error outcome for the operation identified by `opcode` and `uuid`.
///
/// Wire order: opcode (u8), uuid (LP8), error (u16).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorOutcome {
    /// Operation tag, interpreted by the dispatcher.
    pub opcode: u8,
    /// Identifier of the message this outcome answers (at most 255 bytes).
    pub uuid: Bytes,
    /// Numeric error code.
    pub error: u16,
}

impl ErrorOutcome {
    /// Create a new error outcome.
    pub fn new(opcode: u8, uuid: Bytes, error: u16) -> Self {
        Self {
            opcode,
            uuid,
            error,
        }
    }
}

impl WireMessage for ErrorOutcome {
    fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u8(self.opcode);
        w.write_bytes_lp8("uuid", &self.uuid)?;
        w.write_u16(self.error);
        Ok(())
    }

    fn decode(r: &mut Reader) -> Result<Self> {
        Ok(Self {
            opcode: r.read_u8()?,
            uuid: r.read_bytes_lp8()?,
            error: r.read_u16()?,
        })
    }
}

/// A success outcome for the operation identified by `opcode` and `uuid`.
///
/// On the wire `error` is always present. The producer-side default lives in
/// the constructor: [`SuccessOutcome::new`] sets `error = 0`, and
/// [`SuccessOutcome::with_error`] overrides it for a success that still
/// carries a diagnostic code. Decoded records are never optional anywhere.
///
/// Wire order: opcode (u8), uuid (LP8), error (u16), status (bool).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessOutcome {
    /// Operation tag, interpreted by the dispatcher.
    pub opcode: u8,
    /// Identifier of the message this outcome answers (at most 255 bytes).
    pub uuid: Bytes,
    /// Numeric error code, 0 when the producer supplied none.
    pub error: u16,
    /// Operation status flag.
    pub status: bool,
}

impl SuccessOutcome {
    /// Create a success outcome with the default error code of 0.
    pub fn new(opcode: u8, uuid: Bytes, status: bool) -> Self {
        Self {
            opcode,
            uuid,
            error: 0,
            status,
        }
    }

    /// Override the error code.
    pub fn with_error(mut self, error: u16) -> Self {
        self.error = error;
        self
    }
}

impl WireMessage for SuccessOutcome {
    fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u8(self.opcode);
        w.write_bytes_lp8("uuid", &self.uuid)?;
        w.write_u16(self.error);
        w.write_bool(self.status);
        Ok(())
    }

    fn decode(r: &mut Reader) -> Result<Self> {
        Ok(Self {
            opcode: r.read_u8()?,
            uuid: r.read_bytes_lp8()?,
            error: r.read_u16()?,
            status: r.read_bool()?,
        })
    }
}
