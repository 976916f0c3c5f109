//! Shared helpers used by the section validators.

/// Push an error if `value` is NaN or infinite.
pub(crate) fn validate_finite(errors: &mut Vec<String>, name: &str, value: f64) {
    if !value.is_finite() {
        errors.push(format!("{name} = {value} must be a finite number"));
    }
}

/// Push an error if `value` is empty or whitespace.
pub(crate) fn validate_non_empty(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}
