#![no_main]

use authwire::{kvform, CountingSink};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz KV-form decoding - test for panics, crashes, infinite loops
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut sink = CountingSink::default();
    let first = kvform::decode_map(text, &mut sink);

    // Decoded fields carry no newlines, so re-encoding must succeed, and
    // decoding the re-encoded text must reproduce the same mapping.
    let reencoded = kvform::encode_map(&first).expect("decoded fields are newline-free");
    let second = kvform::decode_map(&reencoded, &mut sink);
    assert_eq!(first, second);

    // Strict mode must never panic either.
    let _ = kvform::decode_strict(text);
});
