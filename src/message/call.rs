//! Function-call message - a request to invoke a paid remote function.

use bytes::Bytes;

use super::shared::Fee;
use super::WireMessage;
use crate::buffer::{Reader, Writer};
use crate::error::Result;

/// An invocation request against a plugin's method, with its fee attached.
///
/// Wire order: uuid (LP8), plugin (LP8 string), method (LP8 string),
/// timeout (u64), fee ([`Fee`]). Timeout units are the caller's contract;
/// the codec transports the integer as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    /// Opaque message identifier (at most 255 bytes).
    pub uuid: Bytes,
    /// Target plugin name.
    pub plugin: String,
    /// Method name within the plugin.
    pub method: String,
    /// Invocation timeout, opaque u64.
    pub timeout: u64,
    /// Fee charged for the invocation.
    pub fee: Fee,
}

impl WireMessage for FunctionCall {
    fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_bytes_lp8("uuid", &self.uuid)?;
        w.write_string_lp8("plugin", &self.plugin)?;
        w.write_string_lp8("method", &self.method)?;
        w.write_u64(self.timeout);
        self.fee.encode(w)
    }

    fn decode(r: &mut Reader) -> Result<Self> {
        Ok(Self {
            uuid: r.read_bytes_lp8()?,
            plugin: r.read_string_lp8("plugin")?,
            method: r.read_string_lp8("method")?,
            timeout: r.read_u64()?,
            fee: Fee::decode(r)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerwireError;

    fn call() -> FunctionCall {
        FunctionCall {
            uuid: Bytes::from_static(b"abc"),
            plugin: "pay".to_string(),
            method: "charge".to_string(),
            timeout: 5000,
            fee: Fee::new(100, "USD"),
        }
    }

    #[test]
    fn test_function_call_round_trip() {
        let original = call();
        let encoded = original.to_bytes().unwrap();
        let decoded = FunctionCall::from_bytes(encoded).unwrap();
        assert_eq!(&decoded.uuid[..], b"abc");
        assert_eq!(decoded.plugin, "pay");
        assert_eq!(decoded.method, "charge");
        assert_eq!(decoded.timeout, 5000);
        assert_eq!(decoded.fee.amount, 100);
        assert_eq!(decoded.fee.currency, "USD");
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_function_call_exact_bytes() {
        let encoded = call().to_bytes().unwrap();
        let mut expected = Vec::new();
        expected.extend_from_slice(&[3, b'a', b'b', b'c']);
        expected.extend_from_slice(&[3, b'p', b'a', b'y']);
        expected.extend_from_slice(&[6, b'c', b'h', b'a', b'r', b'g', b'e']);
        expected.extend_from_slice(&5000u64.to_be_bytes());
        expected.extend_from_slice(&100u64.to_be_bytes());
        expected.extend_from_slice(&[3, b'U', b'S', b'D']);
        assert_eq!(&encoded[..], &expected[..]);
    }

    #[test]
    fn test_function_call_oversized_plugin_rejected() {
        let mut bad = call();
        bad.plugin = "p".repeat(300);
        let err = bad.to_bytes().unwrap_err();
        assert_eq!(
            err,
            LedgerwireError::OversizedField {
                field: "plugin",
                len: 300,
            }
        );
    }

    #[test]
    fn test_function_call_truncated_fee_underrun() {
        let encoded = call().to_bytes().unwrap();
        // Drop the fee's currency bytes.
        let truncated = encoded.slice(..encoded.len() - 4);
        let err = FunctionCall::from_bytes(truncated).unwrap_err();
        assert!(matches!(err, LedgerwireError::Underrun { .. }));
    }

    #[test]
    fn test_function_call_non_utf8_method_rejected() {
        let mut bytes = call().to_bytes().unwrap().to_vec();
        // uuid takes bytes 0..4, plugin 4..8; corrupt the method body.
        bytes[9] = 0xFF;
        bytes[10] = 0xFE;
        let err = FunctionCall::from_bytes(bytes).unwrap_err();
        assert_eq!(err, LedgerwireError::InvalidUtf8 { field: "method" });
    }
}
