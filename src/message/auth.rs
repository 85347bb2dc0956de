//! Authorization messages - granting and revoking a user's standing
//! within a subnet.
//!
//! Both messages share the same layout: user (32B), subnet (32B),
//! proof ([`Signature`]). They remain distinct types because which one a
//! buffer holds is decided by the caller's dispatch, not by the bytes.

use bytes::Bytes;

use super::shared::{Signature, IDENTITY_SIZE};
use super::WireMessage;
use crate::buffer::{Reader, Writer};
use crate::error::Result;

/// Grant a user authorization under a subnet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorize {
    /// User identity being authorized (exactly 32 bytes to encode).
    pub user: Bytes,
    /// Scoping subnet identity (exactly 32 bytes to encode).
    pub subnet: Bytes,
    /// Proof that the grantor may authorize.
    pub proof: Signature,
}

impl WireMessage for Authorize {
    fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_bytes_fixed("user", &self.user, IDENTITY_SIZE)?;
        w.write_bytes_fixed("subnet", &self.subnet, IDENTITY_SIZE)?;
        self.proof.encode(w)
    }

    fn decode(r: &mut Reader) -> Result<Self> {
        Ok(Self {
            user: r.read_bytes_fixed(IDENTITY_SIZE)?,
            subnet: r.read_bytes_fixed(IDENTITY_SIZE)?,
            proof: Signature::decode(r)?,
        })
    }
}

/// Revoke a user's authorization under a subnet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnAuthorize {
    /// User identity being revoked (exactly 32 bytes to encode).
    pub user: Bytes,
    /// Scoping subnet identity (exactly 32 bytes to encode).
    pub subnet: Bytes,
    /// Proof that the revoker may revoke.
    pub proof: Signature,
}

impl WireMessage for UnAuthorize {
    fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_bytes_fixed("user", &self.user, IDENTITY_SIZE)?;
        w.write_bytes_fixed("subnet", &self.subnet, IDENTITY_SIZE)?;
        self.proof.encode(w)
    }

    fn decode(r: &mut Reader) -> Result<Self> {
        Ok(Self {
            user: r.read_bytes_fixed(IDENTITY_SIZE)?,
            subnet: r.read_bytes_fixed(IDENTITY_SIZE)?,
            proof: Signature::decode(r)?,
        })
    }
}
