//! Argument extraction and splitting for gradient function calls.

/// The text between the first `(` and the last `)`.
///
/// Empty when either parenthesis is missing or they are out of order.
pub fn inner_arguments(text: &str) -> &str {
    match (text.find('('), text.rfind(')')) {
        (Some(open), Some(close)) if close > open => &text[open + 1..close],
        _ => "",
    }
}

/// Split gradient arguments on `", "` separators that are not inside a
/// parenthesised group, so `rgba(1, 2, 3, 0.5) 10%` stays one argument.
///
/// A separator counts as nested when the text after its comma reaches a `)`
/// before any `(`.
pub fn split_arguments(inner: &str) -> Vec<&str> {
    let bytes = inner.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] == b',' && bytes[i + 1] == b' ' && !closes_before_opening(&bytes[i + 1..]) {
            parts.push(&inner[start..i]);
            i += 2;
            start = i;
        } else {
            i += 1;
        }
    }
    parts.push(&inner[start..]);
    parts
}

fn closes_before_opening(rest: &[u8]) -> bool {
    rest.iter()
        .find(|&&b| b == b'(' || b == b')')
        .is_some_and(|&b| b == b')')
}
