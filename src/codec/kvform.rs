//! # KV-Form Codec
//!
//! Line-oriented `key:value\n` serialization for string mappings.
//!
//! Encoding is strict: a newline inside a key or value would corrupt line
//! framing irrecoverably, so it fails with
//! [`CodecError::EmbeddedNewline`](crate::error::CodecError::EmbeddedNewline).
//! Decoding is lenient: malformed-but-interpretable input (blank lines,
//! missing colons, stray whitespace, missing trailing newline) emits one
//! warning per condition through the caller's sink and recovery continues.
//!
//! ## Round-Trip Contract
//! `decode(encode(pairs))` equals `pairs` with each field's leading/trailing
//! ASCII whitespace stripped; ordering, casing, and internal whitespace are
//! preserved. `decode` is idempotent under re-encoding.

use crate::error::{CodecError, Result};
use crate::warn::{CollectingSink, WarningSink};
use std::collections::BTreeMap;
use std::fmt::Display;

fn check_field(field: &'static str, text: &str) -> Result<()> {
    if text.contains('\n') {
        return Err(CodecError::EmbeddedNewline {
            field,
            text: text.to_string(),
        });
    }
    Ok(())
}

/// Encode an ordered sequence of pairs as KV-form text.
///
/// Emits `key:value\n` per pair in input order; an empty slice yields the
/// empty string. Fields are written verbatim, whitespace included.
///
/// # Errors
/// [`CodecError::EmbeddedNewline`] if any key or value contains `\n`. The
/// whole call fails; no partial text is returned.
pub fn encode<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> Result<String> {
    let mut out = String::new();
    for (key, value) in pairs {
        let (key, value) = (key.as_ref(), value.as_ref());
        check_field("key", key)?;
        check_field("value", value)?;
        out.push_str(key);
        out.push(':');
        out.push_str(value);
        out.push('\n');
    }
    Ok(out)
}

/// Encode a mapping as KV-form text, in the map's (sorted) iteration order.
///
/// # Errors
/// Same contract as [`encode`].
pub fn encode_map(map: &BTreeMap<String, String>) -> Result<String> {
    let pairs: Vec<(&str, &str)> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    encode(&pairs)
}

/// Render a non-string field through `Display`, emitting one warning.
///
/// The encoder only accepts string-typed fields; callers that need the old
/// implicit-stringification behavior invoke this once per field before
/// [`encode`], collecting one warning per coercion.
pub fn coerce_to_string<T: Display>(value: &T, sink: &mut dyn WarningSink) -> String {
    let rendered = value.to_string();
    sink.warn(&format!(
        "coerced non-string field to {rendered:?} for KV-form encoding"
    ));
    rendered
}

/// Decode KV-form text into an ordered sequence of `(key, value)` pairs.
///
/// Splits on `\n` and parses each line at its first `:`, stripping ASCII
/// whitespace from both sides of the split independently. Lines that carry no
/// pair (blank, or colon-free) contribute nothing. Every recoverable
/// malformation emits exactly one warning through `sink`:
///
/// | condition | warnings |
/// |---|---|
/// | blank line | 1 |
/// | line with no `:` | 1 |
/// | whitespace stripped from key | 1 |
/// | whitespace stripped from value | 1 |
/// | empty key before `:` | 1 |
/// | input missing trailing newline | 1 |
///
/// Conditions are additive; one line can trigger several.
pub fn decode(text: &str, sink: &mut dyn WarningSink) -> Vec<(String, String)> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    match lines.last() {
        // Trailing newline produces one empty artifact; drop it silently.
        Some(&"") => {
            lines.pop();
        }
        Some(_) => sink.warn("KV-form input has no trailing newline"),
        None => {}
    }

    let mut pairs = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        let lineno = idx + 1;
        if line.is_empty() {
            sink.warn(&format!("line {lineno}: no key-value pair on blank line"));
            continue;
        }
        let Some((raw_key, raw_value)) = line.split_once(':') else {
            sink.warn(&format!("line {lineno}: no colon separator in {line:?}"));
            continue;
        };
        if raw_key.is_empty() {
            sink.warn(&format!("line {lineno}: empty key in {line:?}"));
        }
        let key = raw_key.trim_matches(|c: char| c.is_ascii_whitespace());
        if key != raw_key {
            sink.warn(&format!(
                "line {lineno}: stripped whitespace from key {raw_key:?}"
            ));
        }
        let value = raw_value.trim_matches(|c: char| c.is_ascii_whitespace());
        if value != raw_value {
            sink.warn(&format!(
                "line {lineno}: stripped whitespace from value {raw_value:?}"
            ));
        }
        pairs.push((key.to_string(), value.to_string()));
    }
    pairs
}

/// Decode KV-form text into a mapping; on duplicate keys the last occurrence
/// wins. Warning behavior is identical to [`decode`].
pub fn decode_map(text: &str, sink: &mut dyn WarningSink) -> BTreeMap<String, String> {
    decode(text, sink).into_iter().collect()
}

/// Decode KV-form text, rejecting any input that lenient decoding would warn
/// about.
///
/// # Errors
/// [`CodecError::Malformed`] carrying the first diagnostic; no partial result
/// is returned.
pub fn decode_strict(text: &str) -> Result<Vec<(String, String)>> {
    let mut sink = CollectingSink::default();
    let pairs = decode(text, &mut sink);
    match sink.take().into_iter().next() {
        Some(first) => Err(CodecError::Malformed(first)),
        None => Ok(pairs),
    }
}
