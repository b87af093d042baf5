//! Numeric coercion.
//!
//! Parsing and classification are separate steps: [`parse_number`] is the
//! parse attempt, [`is_number`] is the predicate built on top of it. Numeric
//! strings count as numbers; `"abc"`, `""`, `"NaN"` and `"inf"` do not.

use serde_json::Value;

/// Parse a decimal number (optional sign, fraction and exponent).
/// Hex, `NaN` and infinities are rejected.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// `true` for JSON numbers and strings that [`parse_number`] accepts.
pub fn is_number(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(s) => parse_number(s).is_some(),
        _ => false,
    }
}

/// Coerce to `f64`, falling back to `0.0` for anything non-numeric.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_number(s).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Truncate a numeric string to at most `decimals` fractional digits.
///
/// The result is always plain decimal notation (exponents are expanded) and
/// carries no trailing fractional zeros. Non-numeric input yields `"0"`.
pub fn to_fixed(value: &str, decimals: usize) -> String {
    let value = value.trim();
    let plain = if is_plain_decimal(value) {
        value.to_string()
    } else {
        match parse_number(value) {
            // f64's Display never uses scientific notation
            Some(f) => format!("{f}"),
            None => return "0".into(),
        }
    };

    let (negative, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, plain.strip_prefix('+').unwrap_or(&plain)),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let int_part = int_part.trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac: &str = &frac_part[..frac_part.len().min(decimals)];
    let frac = frac.trim_end_matches('0');

    let mut out = String::with_capacity(int_part.len() + frac.len() + 2);
    if negative && !(int_part == "0" && frac.is_empty()) {
        out.push('-');
    }
    out.push_str(int_part);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn is_plain_decimal(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    let mut dots = 0;
    !digits.is_empty()
        && digits.bytes().any(|b| b.is_ascii_digit())
        && digits.bytes().all(|b| {
            if b == b'.' {
                dots += 1;
                dots == 1
            } else {
                b.is_ascii_digit()
            }
        })
}

/// Scale an integer amount of base units down by `decimals`,
/// e.g. `("1500000", 6)` → `"1.5"`. `None` if `amount` is not an integer.
pub fn format_units(amount: &str, decimals: u32) -> Option<String> {
    let amount = amount.trim();
    let (negative, digits) = match amount.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, amount),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let decimals = decimals as usize;
    let padded = format!("{digits:0>width$}", width = decimals + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let fixed = to_fixed(&format!("{int_part}.{frac_part}"), decimals);
    Some(if negative && fixed != "0" {
        format!("-{fixed}")
    } else {
        fixed
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_strings_are_numbers() {
        assert!(is_number(&json!("42")));
        assert!(is_number(&json!(" -1.5e3 ")));
        assert!(is_number(&json!(7)));
        assert!(!is_number(&json!("abc")));
        assert!(!is_number(&json!("")));
        assert!(!is_number(&json!("NaN")));
        assert!(!is_number(&json!("inf")));
        assert!(!is_number(&json!("0x10")));
        assert!(!is_number(&Value::Null));
    }

    #[test]
    fn to_number_falls_back_to_zero() {
        assert_eq!(to_number(&json!("2.5")), 2.5);
        assert_eq!(to_number(&json!(true)), 0.0);
        assert_eq!(to_number(&json!("x")), 0.0);
    }

    #[test]
    fn to_fixed_truncates() {
        assert_eq!(to_fixed("1.23456", 2), "1.23");
        assert_eq!(to_fixed("1.999", 0), "1");
        assert_eq!(to_fixed("-0.001", 2), "0");
        assert_eq!(to_fixed("10.500", 6), "10.5");
        assert_eq!(to_fixed("007", 2), "7");
    }

    #[test]
    fn to_fixed_expands_exponents() {
        assert_eq!(to_fixed("1e-7", 8), "0.0000001");
        assert_eq!(to_fixed("1.5e21", 2), "1500000000000000000000");
        assert_eq!(to_fixed("junk", 2), "0");
    }

    #[test]
    fn to_fixed_keeps_precision_of_long_strings() {
        assert_eq!(
            to_fixed("123456789012345678901234567890.123456", 3),
            "123456789012345678901234567890.123"
        );
    }

    #[test]
    fn format_units_scales() {
        assert_eq!(format_units("1500000", 6).as_deref(), Some("1.5"));
        assert_eq!(format_units("1", 18).as_deref(), Some("0.000000000000000001"));
        assert_eq!(format_units("-25", 1).as_deref(), Some("-2.5"));
        assert_eq!(format_units("100", 0).as_deref(), Some("100"));
        assert_eq!(format_units("1.5", 6), None);
    }
}
