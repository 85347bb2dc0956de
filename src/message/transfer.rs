//! Transfer messages - monetary movements between parties.
//!
//! Credit and Refund identify the affected user by a raw 32-byte identity;
//! Debit instead carries the payer's authorization as a full [`Signature`],
//! so a Debit proves both the payer's consent (`user`) and the debiting
//! party's authority (`proof`).

use bytes::Bytes;

use super::shared::{Signature, IDENTITY_SIZE};
use super::WireMessage;
use crate::buffer::{Reader, Writer};
use crate::error::Result;

/// A credit: funds added to a user's balance under a subnet.
///
/// Wire order: uuid (LP8), amount (u64), currency (LP8 string),
/// user (32B), subnet (32B), proof ([`Signature`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credit {
    /// Opaque message identifier (at most 255 bytes).
    pub uuid: Bytes,
    /// Amount in the smallest currency unit.
    pub amount: u64,
    /// Currency code.
    pub currency: String,
    /// Credited user identity (exactly 32 bytes to encode).
    pub user: Bytes,
    /// Scoping subnet identity (exactly 32 bytes to encode).
    pub subnet: Bytes,
    /// Authorization proof for this credit.
    pub proof: Signature,
}

impl WireMessage for Credit {
    fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_bytes_lp8("uuid", &self.uuid)?;
        w.write_u64(self.amount);
        w.write_string_lp8("currency", &self.currency)?;
        w.write_bytes_fixed("user", &self.user, IDENTITY_SIZE)?;
        w.write_bytes_fixed("subnet", &self.subnet, IDENTITY_SIZE)?;
        self.proof.encode(w)
    }

    fn decode(r: &mut Reader) -> Result<Self> {
        Ok(Self {
            uuid: r.read_bytes_lp8()?,
            amount: r.read_u64()?,
            currency: r.read_string_lp8("currency")?,
            user: r.read_bytes_fixed(IDENTITY_SIZE)?,
            subnet: r.read_bytes_fixed(IDENTITY_SIZE)?,
            proof: Signature::decode(r)?,
        })
    }
}

/// A refund: funds returned to a user, referencing a prior debit.
///
/// `debit` is treated as an opaque blob; it is conventionally the uuid of
/// the [`Debit`] being reversed, but the codec does not enforce the link.
///
/// Wire order: uuid (LP8), debit (LP8), amount (u64), currency (LP8 string),
/// user (32B), subnet (32B), proof ([`Signature`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refund {
    /// Opaque message identifier (at most 255 bytes).
    pub uuid: Bytes,
    /// Reference to the debit being reversed (at most 255 bytes).
    pub debit: Bytes,
    /// Amount in the smallest currency unit.
    pub amount: u64,
    /// Currency code.
    pub currency: String,
    /// Refunded user identity (exactly 32 bytes to encode).
    pub user: Bytes,
    /// Scoping subnet identity (exactly 32 bytes to encode).
    pub subnet: Bytes,
    /// Authorization proof for this refund.
    pub proof: Signature,
}

impl WireMessage for Refund {
    fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_bytes_lp8("uuid", &self.uuid)?;
        w.write_bytes_lp8("debit", &self.debit)?;
        w.write_u64(self.amount);
        w.write_string_lp8("currency", &self.currency)?;
        w.write_bytes_fixed("user", &self.user, IDENTITY_SIZE)?;
        w.write_bytes_fixed("subnet", &self.subnet, IDENTITY_SIZE)?;
        self.proof.encode(w)
    }

    fn decode(r: &mut Reader) -> Result<Self> {
        Ok(Self {
            uuid: r.read_bytes_lp8()?,
            debit: r.read_bytes_lp8()?,
            amount: r.read_u64()?,
            currency: r.read_string_lp8("currency")?,
            user: r.read_bytes_fixed(IDENTITY_SIZE)?,
            subnet: r.read_bytes_fixed(IDENTITY_SIZE)?,
            proof: Signature::decode(r)?,
        })
    }
}

/// A debit: funds taken from a user's balance under a subnet.
///
/// Wire order: uuid (LP8), amount (u64), currency (LP8 string),
/// user ([`Signature`] — the payer's consent), subnet (32B),
/// proof ([`Signature`] — the debiting party's authority).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debit {
    /// Opaque message identifier (at most 255 bytes).
    pub uuid: Bytes,
    /// Amount in the smallest currency unit.
    pub amount: u64,
    /// Currency code.
    pub currency: String,
    /// Payer consent signature.
    pub user: Signature,
    /// Scoping subnet identity (exactly 32 bytes to encode).
    pub subnet: Bytes,
    /// Debiting party's authorization proof.
    pub proof: Signature,
}

impl WireMessage for Debit {
    fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_bytes_lp8("uuid", &self.uuid)?;
        w.write_u64(self.amount);
        w.write_string_lp8("currency", &self.currency)?;
        self.user.encode(w)?;
        w.write_bytes_fixed("subnet", &self.subnet, IDENTITY_SIZE)?;
        self.proof.encode(w)
    }

    fn decode(r: &mut Reader) -> Result<Self> {
        Ok(Self {
            uuid: r.read_bytes_lp8()?,
            amount: r.read_u64()?,
            currency: r.read_string_lp8("currency")?,
            user: Signature::decode(r)?,
            subnet: r.read_bytes_fixed(IDENTITY_SIZE)?,
            proof: Signature::decode(r)?,
        })
    }
}
