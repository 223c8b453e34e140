//! Generic sequence reversal.

/// Return a new `Vec` with the slice's elements in reverse order.
///
/// Reversing twice yields a sequence equal to the original; the empty slice
/// reverses to an empty `Vec`.
pub fn reversed<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}

/// Return the string with its characters in reverse order.
///
/// Reverses by `char`, not by byte, so multi-byte UTF-8 stays intact.
pub fn reversed_str(s: &str) -> String {
    s.chars().rev().collect()
}
