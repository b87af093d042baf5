//! Lenient JSON decoding for values that arrive as strings.

use serde_json::{Map, Value};
use std::borrow::Cow;

/// Interpret `value` as structured JSON.
///
/// Objects and arrays are returned as-is (borrowed, never re-parsed).
/// Strings go through [`parse_json_like`]. Other scalars are not JSON
/// documents and yield `None`.
pub fn to_json(value: &Value) -> Option<Cow<'_, Value>> {
    match value {
        Value::Object(_) | Value::Array(_) => Some(Cow::Borrowed(value)),
        Value::String(s) => parse_json_like(s).map(Cow::Owned),
        _ => None,
    }
}

/// Strict JSON parse, falling back to a repair of the unquoted brace
/// shorthand `{a:1,b:x}` → `{"a":1,"b":"x"}`. Returns `None` on failure.
///
/// The repair handles one flat level only; nested braces are not repaired.
pub fn parse_json_like(s: &str) -> Option<Value> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(v) = serde_json::from_str(s) {
        return Some(v);
    }
    repair_brace_shorthand(s).map(Value::Object)
}

fn repair_brace_shorthand(s: &str) -> Option<Map<String, Value>> {
    let inner = s.strip_prefix('{')?.strip_suffix('}')?;
    if inner.contains(['{', '}']) {
        return None;
    }
    let mut map = Map::new();
    for pair in inner.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once(':')?;
        let key = unquote(key.trim());
        if key.is_empty() {
            return None;
        }
        map.insert(key.to_string(), repair_token(value.trim()));
    }
    Some(map)
}

/// Numbers stay numbers; every other token, `true` and `null` included,
/// becomes a string.
fn repair_token(token: &str) -> Value {
    match serde_json::from_str::<Value>(token) {
        Ok(v @ Value::Number(_)) => v,
        _ => Value::String(unquote(token).to_string()),
    }
}

fn unquote(s: &str) -> &str {
    s.trim_matches(|c| c == '"' || c == '\'')
}
