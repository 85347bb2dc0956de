//! Message module - the accounting protocol's wire records and their codecs.
//!
//! Each record is a flat value type with a strict, ordered field layout.
//! Field order is part of the wire format: the integration suite pins each
//! type's layout with golden byte fixtures, and reordering a field is a
//! breaking change (there is no version tag at this layer).
//!
//! Records:
//! - [`Signature`], [`Fee`] - shared value types embedded in other messages
//! - [`Credit`], [`Debit`], [`Refund`] - monetary movements
//! - [`Authorize`], [`UnAuthorize`] - per-subnet authorization changes
//! - [`FunctionCall`] - paid remote invocation request
//! - [`ErrorOutcome`], [`SuccessOutcome`] - operation outcome notifications

mod auth;
mod call;
mod outcome;
mod shared;
mod transfer;

pub use auth::{Authorize, UnAuthorize};
pub use call::FunctionCall;
pub use outcome::{ErrorOutcome, SuccessOutcome};
pub use shared::{Fee, Signature, IDENTITY_SIZE, SIGNATURE_SIZE, SIGNER_SIZE};
pub use transfer::{Credit, Debit, Refund};

use bytes::Bytes;

use crate::buffer::{Reader, Writer};
use crate::error::Result;

/// Paired encode/decode contract implemented by every wire record.
///
/// `encode`/`decode` operate on a shared cursor so composite messages can
/// embed sub-records ([`Signature`], [`Fee`]) and callers can pack several
/// messages into one buffer under their own framing. The whole-buffer
/// helpers `to_bytes`/`from_bytes` cover the common single-message case;
/// `from_bytes` additionally enforces exact consumption.
pub trait WireMessage: Sized {
    /// Append this record's fields to the writer, in wire order.
    fn encode(&self, w: &mut Writer) -> Result<()>;

    /// Read one record from the cursor, advancing it past the last field.
    fn decode(r: &mut Reader) -> Result<Self>;

    /// Encode into a fresh buffer.
    fn to_bytes(&self) -> Result<Bytes> {
        let mut w = Writer::new();
        self.encode(&mut w)?;
        let bytes = w.freeze();
        tracing::trace!(
            ty = std::any::type_name::<Self>(),
            len = bytes.len(),
            "encoded message"
        );
        Ok(bytes)
    }

    /// Decode a buffer holding exactly one message.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::LedgerwireError::TrailingData`] if bytes remain
    /// after the last field, on top of the per-field decode errors.
    fn from_bytes(buf: impl Into<Bytes>) -> Result<Self> {
        let mut r = Reader::new(buf);
        let message = Self::decode(&mut r)?;
        r.finish()?;
        tracing::trace!(
            ty = std::any::type_name::<Self>(),
            len = r.position(),
            "decoded message"
        );
        Ok(message)
    }
}
