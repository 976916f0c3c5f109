//! Lenient number reading for stop positions.

use regex::Regex;
use std::sync::LazyLock;

/// Leading decimal number: optional sign, digits with optional fraction (or
/// a bare fraction), optional exponent.
static FLOAT_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap()
});

/// Read the longest numeric prefix of `s`, ignoring leading whitespace and
/// any trailing unit (`85.1562%` → `85.1562`, `90deg` → `90`).
///
/// Returns `NaN` when `s` does not start with a number.
pub fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    for (literal, value) in [
        ("Infinity", f64::INFINITY),
        ("+Infinity", f64::INFINITY),
        ("-Infinity", f64::NEG_INFINITY),
    ] {
        if s.starts_with(literal) {
            return value;
        }
    }
    FLOAT_PREFIX_RE
        .find(s)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages() {
        assert_eq!(parse_float_prefix("85.1562%"), 85.1562);
        assert_eq!(parse_float_prefix("0%"), 0.0);
        assert_eq!(parse_float_prefix("100"), 100.0);
    }

    #[test]
    fn units_and_signs() {
        assert_eq!(parse_float_prefix("90deg"), 90.0);
        assert_eq!(parse_float_prefix("-12.5%"), -12.5);
        assert_eq!(parse_float_prefix("+3"), 3.0);
        assert_eq!(parse_float_prefix(".5%"), 0.5);
        assert_eq!(parse_float_prefix("5.%"), 5.0);
        assert_eq!(parse_float_prefix("1e2%"), 100.0);
        assert_eq!(parse_float_prefix("2e%"), 2.0);
    }

    #[test]
    fn leading_whitespace_is_skipped() {
        assert_eq!(parse_float_prefix("  42%"), 42.0);
    }

    #[test]
    fn infinity_literals() {
        assert_eq!(parse_float_prefix("Infinity%"), f64::INFINITY);
        assert_eq!(parse_float_prefix("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn non_numeric_is_nan() {
        assert!(parse_float_prefix("red").is_nan());
        assert!(parse_float_prefix("").is_nan());
        assert!(parse_float_prefix("%").is_nan());
        assert!(parse_float_prefix("-").is_nan());
    }
}
