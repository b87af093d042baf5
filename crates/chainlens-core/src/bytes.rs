//! Byte payload normalization.
//!
//! GMP recovery flows hand back payloads in whatever shape the upstream
//! serializer produced: a real buffer, a JSON array of numbers, or a JSON
//! object keyed `"0"`, `"1"`, … (a typed array run through `JSON.stringify`).
//! [`normalize_recovery_bytes`] folds all of them into one byte buffer.

use crate::number::parse_number;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::Value;
use std::borrow::Cow;

/// A byte payload in one of its transport shapes.
#[derive(Debug, Clone, Copy)]
pub enum RecoveryInput<'a> {
    /// Already a byte buffer.
    Bytes(&'a [u8]),
    /// A decoded JSON value (array or numeric-keyed object).
    Json(&'a Value),
}

impl<'a> From<&'a [u8]> for RecoveryInput<'a> {
    fn from(b: &'a [u8]) -> Self {
        RecoveryInput::Bytes(b)
    }
}

impl<'a> From<&'a Value> for RecoveryInput<'a> {
    fn from(v: &'a Value) -> Self {
        RecoveryInput::Json(v)
    }
}

/// Normalize a recovery payload into bytes.
///
/// - a buffer is returned borrowed, untouched
/// - an array must contain only byte-valued numbers (or numeric strings)
/// - an object must use canonical non-negative integer keys only (`"0"`,
///   `"12"`, never `"01"` or `"a"`); entries are ordered by numeric key, so
///   sparse keys are accepted and compacted (`{"0":1,"2":3}` → `[1, 3]`)
///
/// Any entry that is not an integer in `0..=255` rejects the whole payload.
/// Every other shape yields `None`.
pub fn normalize_recovery_bytes<'a>(input: impl Into<RecoveryInput<'a>>) -> Option<Cow<'a, [u8]>> {
    match input.into() {
        RecoveryInput::Bytes(b) => Some(Cow::Borrowed(b)),
        RecoveryInput::Json(Value::Array(items)) => items
            .iter()
            .map(byte_value)
            .collect::<Option<Vec<u8>>>()
            .map(Cow::Owned),
        RecoveryInput::Json(Value::Object(map)) => {
            let mut entries = map
                .iter()
                .map(|(k, v)| Some((canonical_index(k)?, v)))
                .collect::<Option<Vec<_>>>()?;
            entries.sort_by_key(|(idx, _)| *idx);
            entries
                .into_iter()
                .map(|(_, v)| byte_value(v))
                .collect::<Option<Vec<u8>>>()
                .map(Cow::Owned)
        }
        RecoveryInput::Json(_) => None,
    }
}

/// Parse `key` as a non-negative integer whose decimal rendering is `key`
/// itself.
fn canonical_index(key: &str) -> Option<u64> {
    let idx: u64 = key.parse().ok()?;
    (idx.to_string() == key).then_some(idx)
}

fn byte_value(v: &Value) -> Option<u8> {
    let f = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => parse_number(s)?,
        _ => return None,
    };
    if f.fract() != 0.0 || !(0.0..=255.0).contains(&f) {
        return None;
    }
    Some(f as u8)
}

/// Decode a byte payload carried as text: `0x`-hex, bare hex, a JSON
/// array/object accepted by [`normalize_recovery_bytes`], or standard
/// base64. Strings that are valid hex are read as hex first.
pub fn decode_bytes(s: &str) -> Option<Vec<u8>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if s.starts_with('[') || s.starts_with('{') {
        let v: Value = serde_json::from_str(s).ok()?;
        return normalize_recovery_bytes(&v).map(Cow::into_owned);
    }
    if let Some(h) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return hex::decode(h).ok();
    }
    if s.len() % 2 == 0 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return hex::decode(s).ok();
    }
    STANDARD.decode(s).ok()
}
