#![no_main]

use authwire::{bytes_to_integer, integer_to_bytes};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;

fuzz_target!(|data: &[u8]| {
    // Fuzz the total decoder, then check the canonical re-encode contract
    let n = bytes_to_integer(data);
    let canonical = integer_to_bytes(&n);

    // Canonical form is never longer than the input and never empty
    assert!(!canonical.is_empty());
    assert!(canonical.len() <= data.len().max(1));

    // Round-trip: the canonical bytes decode to the same value
    assert_eq!(bytes_to_integer(&canonical), n);

    // Differential oracle: num-bigint's own signed-bytes conversions agree
    assert_eq!(n, BigInt::from_signed_bytes_be(data));
    assert_eq!(canonical, n.to_signed_bytes_be());
});
