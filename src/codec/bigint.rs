//! # Signed Big-Integer Codec
//!
//! Converts between a signed arbitrary-precision integer and its minimal
//! two's-complement big-endian byte form.
//!
//! The encoding is canonical: every integer has exactly one byte form, the
//! shortest one whose most-significant bit correctly encodes the sign. The
//! decoder is total — every byte string, canonical or not, maps to exactly
//! one integer, and re-encoding always reproduces the canonical form.
//!
//! ## Wire Format
//! ```text
//!      0  ->  00
//!      1  ->  01
//!    255  ->  00 FF
//!     -1  ->  FF
//!   -128  ->  80
//! -32768  ->  80 00
//! ```

use num_bigint::{BigInt, BigUint, Sign};

/// Encode `n` as its minimal two's-complement big-endian byte form.
///
/// Zero encodes as the single byte `0x00`. A positive value whose top bit
/// would read as a sign bit gains one leading `0x00`. A negative value is
/// complemented over the smallest width whose sign bit it can occupy.
/// Handles arbitrary magnitudes.
pub fn integer_to_bytes(n: &BigInt) -> Vec<u8> {
    match n.sign() {
        Sign::NoSign => vec![0x00],
        Sign::Plus => {
            let mut bytes = n.magnitude().to_bytes_be();
            if bytes[0] & 0x80 != 0 {
                bytes.insert(0, 0x00);
            }
            bytes
        }
        Sign::Minus => {
            let magnitude = n.magnitude();
            // Smallest width (in bytes) such that magnitude <= 2^(8*width - 1);
            // the most negative value one extra bit buys is exactly -2^(8w-1).
            let mut width = magnitude.bits().div_ceil(8).max(1) as usize;
            if *magnitude > BigUint::from(1u8) << (8 * width - 1) {
                width += 1;
            }
            let complement = (BigUint::from(1u8) << (8 * width)) - magnitude;
            // complement >= 2^(8*width - 1), so this is exactly `width` bytes
            // with the sign bit set.
            complement.to_bytes_be()
        }
    }
}

/// Decode big-endian two's-complement bytes into a signed integer.
///
/// Total: empty input decodes to zero, and redundant sign-extension bytes are
/// accepted. Canonicality is the encoder's guarantee, not a requirement here.
pub fn bytes_to_integer(b: &[u8]) -> BigInt {
    let Some(&first) = b.first() else {
        return BigInt::from(0u8);
    };
    let unsigned = BigInt::from(BigUint::from_bytes_be(b));
    if first & 0x80 != 0 {
        unsigned - (BigInt::from(1u8) << (8 * b.len()))
    } else {
        unsigned
    }
}
