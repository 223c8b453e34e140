//! # authwire
//!
//! Low-level codec utilities for authentication protocol implementations.
//!
//! This crate converts in-memory values between textual/binary and structured
//! representations. It performs no networking, no cryptography, and no I/O.
//!
//! ## Components
//! - **KV-form**: line-oriented `key:value\n` serialization for string mappings
//! - **Integer codec**: minimal two's-complement big-endian bytes for `BigInt`
//! - **Base64**: RFC 4648 standard alphabet with padding
//! - **XOR**: byte-wise XOR of equal-length byte strings
//! - **Sequence**: generic reversal helpers
//!
//! ## Error Model
//! Two tiers: recoverable malformation during decode is reported through a
//! caller-supplied [`WarningSink`] and never aborts processing; structurally
//! invalid input (a newline inside a KV-form field, mismatched XOR lengths)
//! fails hard with a [`CodecError`] and produces no partial result.
//!
//! ## Example
//! ```rust
//! use authwire::{kvform, CountingSink};
//!
//! let text = kvform::encode(&[("mode", "checkid_setup"), ("ns", "openid")])
//!     .expect("fields are newline-free");
//! assert_eq!(text, "mode:checkid_setup\nns:openid\n");
//!
//! let mut sink = CountingSink::default();
//! let pairs = kvform::decode(&text, &mut sink);
//! assert_eq!(pairs.len(), 2);
//! assert_eq!(sink.count(), 0);
//! ```

pub mod codec;
pub mod error;
pub mod utils;
pub mod warn;

pub use codec::base64::{from_base64, to_base64};
pub use codec::bigint::{bytes_to_integer, integer_to_bytes};
pub use codec::kvform;
pub use codec::xor::xor;
pub use error::{CodecError, Result};
pub use utils::sequence::{reversed, reversed_str};
pub use warn::{CollectingSink, CountingSink, LogSink, WarningSink};
