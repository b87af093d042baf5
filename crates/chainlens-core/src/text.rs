//! String normalization helpers: case folding, delimiter splitting,
//! array coercion and a handful of display utilities.

use serde_json::Value;

/// Case-folding mode applied after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    Upper,
    Lower,
    /// Trim only.
    #[default]
    Normal,
}

/// Options shared by [`split`] and [`to_array`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Token delimiter, `","` by default.
    pub delimiter: String,
    /// Case folding applied to every string token.
    pub case: Case,
    /// Drop empty tokens (and `null` sequence elements).
    pub filter_blank: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            delimiter: ",".into(),
            case: Case::Normal,
            filter_blank: true,
        }
    }
}

impl SplitOptions {
    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            ..Self::default()
        }
    }

    pub fn with_case(mut self, case: Case) -> Self {
        self.case = case;
        self
    }

    pub fn keep_blank(mut self) -> Self {
        self.filter_blank = false;
        self
    }
}

/// Trim `s`, then apply `case`.
pub fn to_case(s: &str, case: Case) -> String {
    let trimmed = s.trim();
    match case {
        Case::Upper => trimmed.to_uppercase(),
        Case::Lower => trimmed.to_lowercase(),
        Case::Normal => trimmed.to_string(),
    }
}

/// Split `s` on the configured delimiter, case-folding and trimming every
/// token. An empty delimiter yields the whole (folded) string as one token.
pub fn split(s: &str, opts: &SplitOptions) -> Vec<String> {
    let tokens: Box<dyn Iterator<Item = &str>> = if opts.delimiter.is_empty() {
        Box::new(std::iter::once(s))
    } else {
        Box::new(s.split(opts.delimiter.as_str()))
    };
    tokens
        .map(|t| to_case(t, opts.case))
        .filter(|t| !opts.filter_blank || !t.is_empty())
        .collect()
}

/// Coerce an arbitrary JSON value into a sequence.
///
/// - arrays are mapped element-wise (strings case-folded)
/// - strings are [`split`]
/// - any other scalar becomes a one-element sequence
///
/// With `filter_blank`, `null`s and empty strings are dropped.
pub fn to_array(value: &Value, opts: &SplitOptions) -> Vec<Value> {
    let items: Vec<Value> = match value {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Value::String(to_case(s, opts.case)),
                other => other.clone(),
            })
            .collect(),
        Value::String(s) => split(s, opts).into_iter().map(Value::String).collect(),
        other => vec![other.clone()],
    };
    if !opts.filter_blank {
        return items;
    }
    items.into_iter().filter(|v| !is_blank(v)).collect()
}

fn is_blank(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Strip one pair of wrapping double quotes, if present.
pub fn remove_double_quote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

/// ASCII-case-insensitive equality; two empty strings are *not* equal, so a
/// missing descriptor field never matches a missing key.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    !a.is_empty() && a.eq_ignore_ascii_case(b)
}

/// Upper-case the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First token of `s` split by `delimiter`.
pub fn head_string<'a>(s: &'a str, delimiter: &str) -> Option<&'a str> {
    s.split(delimiter).find(|t| !t.is_empty())
}

/// Last token of `s` split by `delimiter`.
pub fn last_string<'a>(s: &'a str, delimiter: &str) -> Option<&'a str> {
    s.rsplit(delimiter).find(|t| !t.is_empty())
}

/// Shorten a long hash or address to `head…tail`, keeping `length`
/// characters on each side. Short strings are returned unchanged; a `0x`
/// prefix is kept and not counted.
pub fn ellipse(s: &str, length: usize) -> String {
    let (prefix, body) = match s.strip_prefix("0x") {
        Some(rest) => ("0x", rest),
        None => ("", s),
    };
    let chars: Vec<char> = body.chars().collect();
    if chars.len() <= length * 2 + 3 {
        return s.to_string();
    }
    let head: String = chars[..length].iter().collect();
    let tail: String = chars[chars.len() - length..].iter().collect();
    format!("{prefix}{head}...{tail}")
}

/// `true` if `s` contains any of `patterns` (case-insensitive).
pub fn includes_some_patterns<S: AsRef<str>>(s: &str, patterns: &[S]) -> bool {
    let haystack = s.to_lowercase();
    patterns
        .iter()
        .map(|p| p.as_ref().to_lowercase())
        .any(|p| !p.is_empty() && haystack.contains(&p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn to_case_trims_first() {
        assert_eq!(to_case("  Axelar ", Case::Upper), "AXELAR");
        assert_eq!(to_case("  Axelar ", Case::Lower), "axelar");
        assert_eq!(to_case("  Axelar ", Case::Normal), "Axelar");
    }

    #[test]
    fn split_default_drops_blanks() {
        let parts = split("a, b,,c ,", &SplitOptions::default());
        assert_eq!(parts, vec!["a", "b", "c"]);
    }

    #[test]
    fn split_keep_blank_and_case() {
        let opts = SplitOptions::with_delimiter("/").with_case(Case::Upper).keep_blank();
        assert_eq!(split("ibc//uatom", &opts), vec!["IBC", "", "UATOM"]);
    }

    #[test]
    fn to_array_from_string() {
        let v = to_array(&json!("eth,Avalanche"), &SplitOptions::default().with_case(Case::Lower));
        assert_eq!(v, vec![json!("eth"), json!("avalanche")]);
    }

    #[test]
    fn to_array_from_sequence_filters_nulls() {
        let v = to_array(&json!([" A ", null, "", 3]), &SplitOptions::default());
        assert_eq!(v, vec![json!("A"), json!(3)]);
    }

    #[test]
    fn to_array_wraps_scalars() {
        assert_eq!(to_array(&json!(42), &SplitOptions::default()), vec![json!(42)]);
        assert!(to_array(&Value::Null, &SplitOptions::default()).is_empty());
        assert_eq!(
            to_array(&Value::Null, &SplitOptions::default().keep_blank()),
            vec![Value::Null]
        );
    }

    #[test]
    fn remove_double_quote_only_strips_pairs() {
        assert_eq!(remove_double_quote("\"100\""), "100");
        assert_eq!(remove_double_quote("\"100"), "\"100");
        assert_eq!(remove_double_quote("100"), "100");
    }

    #[test]
    fn equals_ignore_case_rejects_empty() {
        assert!(equals_ignore_case("ETH", "eth"));
        assert!(!equals_ignore_case("", ""));
    }

    #[test]
    fn ellipse_keeps_prefix() {
        let addr = "0x1234567890abcdef1234567890abcdef12345678";
        assert_eq!(ellipse(addr, 4), "0x1234...5678");
        assert_eq!(ellipse("short", 4), "short");
    }

    #[test]
    fn head_and_last() {
        assert_eq!(head_string("ibc/ABC/def", "/"), Some("ibc"));
        assert_eq!(last_string("ibc/ABC/def", "/"), Some("def"));
        assert_eq!(capitalize("axelar"), "Axelar");
    }

    #[test]
    fn includes_patterns() {
        assert!(includes_some_patterns("Insufficient Fee", &["fee", "gas"]));
        assert!(!includes_some_patterns("ok", &["fee"]));
    }
}
