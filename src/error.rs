//! # Error Types
//!
//! Hard-error handling for the codec layer.
//!
//! This module defines the error variants that abort a codec operation with
//! no partial result. Recoverable malformation is not an error; it is
//! reported through the [`crate::warn::WarningSink`] passed to the decode
//! operations and processing continues.
//!
//! ## Error Categories
//! - **Framing Errors**: a KV-form key or value that would corrupt line framing
//! - **Length Errors**: XOR of unequal-length byte strings
//! - **Base64 Errors**: text that is not valid standard-alphabet base64
//! - **Strict Decode Errors**: KV-form input rejected by strict-mode parsing
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use authwire::error::{CodecError, Result};
//! use authwire::kvform;
//!
//! fn render(pairs: &[(&str, &str)]) -> Result<String> {
//!     let text = kvform::encode(pairs)?;
//!     Ok(text)
//! }
//!
//! match render(&[("mode", "id_res\ninvalidate_handle:x")]) {
//!     Err(CodecError::EmbeddedNewline { field, .. }) => assert_eq!(field, "value"),
//!     other => panic!("expected a framing error, got {other:?}"),
//! }
//! ```

use thiserror::Error;

/// CodecError is the primary error type for all codec operations
#[derive(Error, Debug)]
pub enum CodecError {
    /// A KV-form key or value contains a raw newline. The emitted text could
    /// not be parsed back unambiguously, so encoding aborts with no output.
    #[error("cannot encode {field} containing a newline: {text:?}")]
    EmbeddedNewline {
        /// Which field carried the newline: `"key"` or `"value"`
        field: &'static str,
        /// The offending field content
        text: String,
    },

    /// XOR operands must be the same length.
    #[error("length mismatch: {left} bytes vs {right} bytes")]
    LengthMismatch {
        /// Length of the left operand
        left: usize,
        /// Length of the right operand
        right: usize,
    },

    /// The input text is not valid padded standard-alphabet base64.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Strict-mode KV-form decode rejected the input. Carries the first
    /// diagnostic that lenient decoding would have emitted as a warning.
    #[error("malformed key-value form: {0}")]
    Malformed(String),
}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
