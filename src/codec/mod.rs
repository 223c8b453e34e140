//! # Codec Components
//!
//! Pure transforms between textual/binary and structured representations.
//!
//! This module provides the wire-format foundation for the surrounding
//! authentication protocol: string mappings travel as KV-form text, and
//! binary fields (big integers, keys) travel through base64 inside that text.
//!
//! ## Components
//! - **kvform**: line-oriented `key:value\n` mapping codec with warning-based
//!   recovery for malformed input
//! - **bigint**: signed arbitrary-precision integer ↔ minimal two's-complement
//!   big-endian bytes
//! - **base64**: RFC 4648 standard-alphabet wrapper
//! - **xor**: fixed-length byte-wise XOR
//!
//! ## Wire Format
//! ```text
//! key:value\n
//! key:value\n
//! ```
//! No escaping exists for `:` or `\n` inside fields; the first `:` on a line
//! splits key from value, and a newline inside a field is a hard encode error.

pub mod base64;
pub mod bigint;
pub mod kvform;
pub mod xor;
