//! # ledgerwire
//!
//! Binary wire format for a metered, signature-authenticated accounting
//! protocol: monetary movements (credit, debit, refund), per-subnet
//! authorization changes, paid function-call requests, and outcome
//! notifications.
//!
//! This crate is the data contract only. It defines the exact byte layout of
//! each message and the encoder/decoder round-trip guarantee; transport,
//! signature verification, and persistence belong to the layers that produce
//! and consume these buffers.
//!
//! ## Wire format
//!
//! - All multi-byte integers are Big Endian.
//! - Identity blobs (user, subnet, signer) are fixed 32 bytes; detached
//!   signatures are fixed 64 bytes.
//! - Variable fields (uuids, currency codes, plugin/method names) carry one
//!   length byte followed by 0-255 raw bytes.
//! - No framing or version tag at this layer; field order is the contract.
//!
//! ## Example
//!
//! ```
//! use bytes::Bytes;
//! use ledgerwire::{Authorize, Signature, WireMessage};
//!
//! let grant = Authorize {
//!     user: Bytes::from(vec![0x00; 32]),
//!     subnet: Bytes::from(vec![0x01; 32]),
//!     proof: Signature::new(Bytes::from(vec![0x02; 32]), Bytes::from(vec![0x03; 64])),
//! };
//!
//! let encoded = grant.to_bytes().unwrap();
//! assert_eq!(encoded.len(), 160);
//!
//! let decoded = Authorize::from_bytes(encoded).unwrap();
//! assert_eq!(decoded, grant);
//! ```

pub mod buffer;
pub mod error;
pub mod message;

pub use error::{LedgerwireError, Result};
pub use message::{
    Authorize, Credit, Debit, ErrorOutcome, Fee, FunctionCall, Refund, Signature, SuccessOutcome,
    UnAuthorize, WireMessage, IDENTITY_SIZE, SIGNATURE_SIZE, SIGNER_SIZE,
};
