//! Lenient field decoders for API and LCD / RPC JSON.
//!
//! Upstream services emit `null` for empty lists and mix numbers with
//! decimal strings. One odd field must not reject the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null` or missing → `T::default()`. Use with `#[serde(default)]`.
pub fn default_on_null<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// `null` or missing → empty string; numbers and booleans are rendered as
/// text. Objects and arrays are kept as their JSON text.
pub fn string_or_null<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Integers arrive as JSON numbers (RPC) or decimal strings (LCD).
/// Anything else becomes `None`.
pub fn lenient_u64<'de, D>(d: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
