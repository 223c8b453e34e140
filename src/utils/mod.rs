//! # Utility Modules
//!
//! Small supporting helpers used alongside the codecs.
//!
//! ## Components
//! - **Sequence**: generic order-reversal for slices and strings

pub mod sequence;

// Re-export public helpers for convenience
pub use sequence::{reversed, reversed_str};
