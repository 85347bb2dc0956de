//! Shared value codecs embedded in the composite messages.

use bytes::Bytes;

use super::WireMessage;
use crate::buffer::{Reader, Writer};
use crate::error::Result;

/// Size of a signer / user / subnet identity, in bytes.
pub const IDENTITY_SIZE: usize = 32;

/// Size of a signer public key, in bytes.
pub const SIGNER_SIZE: usize = 32;

/// Size of a detached signature, in bytes.
pub const SIGNATURE_SIZE: usize = 64;

/// A detached signature: who signed, and the signature bytes.
///
/// The codec transports both blobs verbatim; verifying the signature is the
/// caller's concern. Wire order: signer (32B fixed), signature (64B fixed).
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use ledgerwire::{Signature, WireMessage};
///
/// let sig = Signature::new(Bytes::from(vec![2u8; 32]), Bytes::from(vec![3u8; 64]));
/// let encoded = sig.to_bytes().unwrap();
/// assert_eq!(encoded.len(), 96);
/// assert_eq!(Signature::from_bytes(encoded).unwrap(), sig);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Signer public key (must be exactly 32 bytes to encode).
    pub signer: Bytes,
    /// Detached signature (must be exactly 64 bytes to encode).
    pub signature: Bytes,
}

impl Signature {
    /// Create a new signature record.
    ///
    /// Lengths are checked at encode time, not here.
    pub fn new(signer: Bytes, signature: Bytes) -> Self {
        Self { signer, signature }
    }
}

impl WireMessage for Signature {
    fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_bytes_fixed("signer", &self.signer, SIGNER_SIZE)?;
        w.write_bytes_fixed("signature", &self.signature, SIGNATURE_SIZE)?;
        Ok(())
    }

    fn decode(r: &mut Reader) -> Result<Self> {
        Ok(Self {
            signer: r.read_bytes_fixed(SIGNER_SIZE)?,
            signature: r.read_bytes_fixed(SIGNATURE_SIZE)?,
        })
    }
}

/// The fee attached to a paid function call.
///
/// `amount` is in the smallest unit of `currency`; no scaling happens here.
/// Wire order: amount (u64), currency (LP8 string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fee {
    /// Amount in the smallest currency unit.
    pub amount: u64,
    /// Currency code (at most 255 UTF-8 bytes).
    pub currency: String,
}

impl Fee {
    /// Create a new fee.
    pub fn new(amount: u64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

impl WireMessage for Fee {
    fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u64(self.amount);
        w.write_string_lp8("currency", &self.currency)?;
        Ok(())
    }

    fn decode(r: &mut Reader) -> Result<Self> {
        Ok(Self {
            amount: r.read_u64()?,
            currency: r.read_string_lp8("currency")?,
        })
    }
}
