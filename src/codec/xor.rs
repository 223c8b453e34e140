//! Byte-wise XOR of two equal-length byte strings.

use crate::error::{CodecError, Result};

/// XOR `a` and `b` byte-by-byte; the result has the same length as both
/// inputs.
///
/// # Errors
/// [`CodecError::LengthMismatch`] unless `a.len() == b.len()`.
pub fn xor(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(CodecError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x ^ y).collect())
}
