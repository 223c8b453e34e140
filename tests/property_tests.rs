//! Property-based tests using proptest
//!
//! These tests validate codec invariants across a wide range of randomly
//! generated inputs, ensuring robust behavior under all conditions.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use authwire::{
    bytes_to_integer, from_base64, integer_to_bytes, kvform, reversed, reversed_str, to_base64,
    xor, CountingSink,
};
use num_bigint::BigInt;
use proptest::prelude::*;

// A KV-form field with no framing characters and no edge whitespace, so it
// survives encode/decode byte-for-byte.
fn clean_field() -> impl Strategy<Value = String> {
    "[!-9;-~][ -9;-~]*[!-9;-~]|[!-9;-~]"
}

// Property: Encode/decode round-trips any sequence of clean fields exactly
proptest! {
    #[test]
    fn prop_kvform_roundtrip(pairs in prop::collection::vec((clean_field(), clean_field()), 0..50)) {
        let text = kvform::encode(&pairs).expect("clean fields contain no newline");

        let mut sink = CountingSink::default();
        let decoded = kvform::decode(&text, &mut sink);

        prop_assert_eq!(decoded, pairs);
        prop_assert_eq!(sink.count(), 0);
    }
}

// Property: Decoding strips exactly the edge whitespace from each field
proptest! {
    #[test]
    fn prop_kvform_strips_edge_whitespace(
        pairs in prop::collection::vec((clean_field(), clean_field()), 1..20),
        pad in " {0,3}",
    ) {
        let padded: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (format!("{pad}{k}{pad}"), format!("{pad}{v}{pad}")))
            .collect();
        let text = kvform::encode(&padded).expect("padding adds no newline");

        let decoded = kvform::decode(&text, &mut CountingSink::default());

        prop_assert_eq!(decoded, pairs);
    }
}

// Property: Decode never panics on arbitrary text and decode/re-encode/decode
// is idempotent
proptest! {
    #[test]
    fn prop_kvform_decode_total_and_idempotent(text in any::<String>()) {
        let mut sink = CountingSink::default();
        let first = kvform::decode_map(&text, &mut sink);

        let reencoded = kvform::encode_map(&first)
            .expect("decoded fields never contain newlines");
        let second = kvform::decode_map(&reencoded, &mut sink);

        prop_assert_eq!(first, second);
    }
}

// Property: Encode rejects a newline anywhere in any field
proptest! {
    #[test]
    fn prop_kvform_encode_rejects_newlines(
        prefix in "[a-z]{0,8}",
        suffix in "[a-z]{0,8}",
        in_key in any::<bool>(),
    ) {
        let tainted = format!("{prefix}\n{suffix}");
        let pairs = if in_key {
            [(tainted.clone(), "v".to_string())]
        } else {
            [("k".to_string(), tainted.clone())]
        };

        prop_assert!(kvform::encode(&pairs).is_err());
    }
}

// Property: Integer encoding round-trips any i128
proptest! {
    #[test]
    fn prop_integer_roundtrip_i128(n in any::<i128>()) {
        let n = BigInt::from(n);
        let bytes = integer_to_bytes(&n);

        prop_assert_eq!(bytes_to_integer(&bytes), n);
    }
}

// Property: Integer encoding round-trips magnitudes far beyond 64 bits
proptest! {
    #[test]
    fn prop_integer_roundtrip_big(
        magnitude in prop::collection::vec(any::<u8>(), 0..256),
        negative in any::<bool>(),
    ) {
        let mut n = BigInt::from_bytes_be(num_bigint::Sign::Plus, &magnitude);
        if negative {
            n = -n;
        }
        let bytes = integer_to_bytes(&n);

        prop_assert_eq!(bytes_to_integer(&bytes), n);
    }
}

// Property: Decoding arbitrary bytes and re-encoding yields the canonical
// minimal form, which decodes back to the same value
proptest! {
    #[test]
    fn prop_integer_reencode_canonical(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let n = bytes_to_integer(&bytes);
        let canonical = integer_to_bytes(&n);

        prop_assert!(canonical.len() <= bytes.len().max(1));
        prop_assert_eq!(bytes_to_integer(&canonical), n);
    }
}

// Property: The hand-rolled integer codec agrees with num-bigint's own
// signed-bytes conversions
proptest! {
    #[test]
    fn prop_integer_codec_matches_num_bigint(n in any::<i128>(), bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        let n = BigInt::from(n);
        prop_assert_eq!(integer_to_bytes(&n), n.to_signed_bytes_be());

        prop_assert_eq!(bytes_to_integer(&bytes), BigInt::from_signed_bytes_be(&bytes));
    }
}

// Property: Base64 round-trips arbitrary byte strings
proptest! {
    #[test]
    fn prop_base64_roundtrip(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let encoded = to_base64(&data);

        prop_assert!(encoded
            .bytes()
            .all(|c| c.is_ascii_alphanumeric() || c == b'+' || c == b'/' || c == b'='));
        prop_assert_eq!(from_base64(&encoded).expect("own output decodes"), data);
    }
}

// Property: XOR is an involution and zero is its identity
proptest! {
    #[test]
    fn prop_xor_laws(a in prop::collection::vec(any::<u8>(), 0..512), b_seed in any::<u64>()) {
        let b: Vec<u8> = a
            .iter()
            .enumerate()
            .map(|(i, _)| (b_seed.rotate_left((i % 64) as u32) & 0xFF) as u8)
            .collect();
        let zeros = vec![0u8; a.len()];

        // xor(a, a) is all zeros
        prop_assert_eq!(xor(&a, &a).expect("equal lengths"), zeros.clone());
        // xor(a, zeros) is a
        prop_assert_eq!(xor(&a, &zeros).expect("equal lengths"), a.clone());
        // xor(xor(a, b), b) is a
        let once = xor(&a, &b).expect("equal lengths");
        prop_assert_eq!(xor(&once, &b).expect("equal lengths"), a);
    }
}

// Property: XOR rejects every mismatched length pair
proptest! {
    #[test]
    fn prop_xor_rejects_mismatched_lengths(len_a in 0usize..256, len_b in 0usize..256) {
        prop_assume!(len_a != len_b);

        let a = vec![0xAAu8; len_a];
        let b = vec![0x55u8; len_b];

        prop_assert!(xor(&a, &b).is_err());
    }
}

// Property: Double reversal is the identity
proptest! {
    #[test]
    fn prop_double_reversal_identity(seq in prop::collection::vec(any::<u16>(), 0..1000), s in ".{0,100}") {
        prop_assert_eq!(reversed(&reversed(&seq)), seq);
        prop_assert_eq!(reversed_str(&reversed_str(&s)), s);
    }
}
