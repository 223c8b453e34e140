//! Base64 transport encoding: RFC 4648 standard alphabet with `=` padding.
//!
//! Thin wrapper used to carry binary fields (integer codec output, keys)
//! through the KV-form text channel.

use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode arbitrary bytes as padded standard-alphabet base64.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode padded standard-alphabet base64 text.
///
/// # Errors
/// [`CodecError::Base64`](crate::error::CodecError::Base64) for text outside
/// the alphabet or with bad padding.
pub fn from_base64(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_round_trip_includes_empty_and_nul() {
        for case in [&b""[..], b"x", b"\x00", b"\x01", &[0u8; 100]] {
            let encoded = to_base64(case);
            assert!(encoded
                .bytes()
                .all(|c| c.is_ascii_alphanumeric() || c == b'+' || c == b'/' || c == b'='));
            assert_eq!(from_base64(&encoded).unwrap(), case);
        }
    }

    #[test]
    fn test_invalid_text_is_an_error() {
        assert!(from_base64("not base64!").is_err());
        assert!(from_base64("AAA").is_err()); // bad padding
    }
}
