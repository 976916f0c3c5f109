//! `[gradient]` validation: direction syntax.

use regex::Regex;
use std::sync::LazyLock;

use crate::schema::GradiaConfig;

use super::helpers::validate_non_empty;

/// Angle with a CSS unit, e.g. `90deg`, `-0.25turn`, `1.5rad`.
static ANGLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)(deg|grad|rad|turn)$").unwrap()
});

/// Keyword direction or shape, e.g. `left`, `to top right`, `circle at center`.
static KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9%.\- ]*$").unwrap());

/// Whether `direction` looks like something a gradient function accepts as
/// its first argument.
pub fn is_valid_direction(direction: &str) -> bool {
    let direction = direction.trim();
    ANGLE_RE.is_match(direction) || KEYWORD_RE.is_match(direction)
}

pub(crate) fn validate_gradient(errors: &mut Vec<String>, config: &GradiaConfig) {
    let direction = &config.gradient.direction;
    validate_non_empty(errors, "gradient.direction", direction);
    if !direction.trim().is_empty() && !is_valid_direction(direction) {
        errors.push(format!(
            "gradient.direction = '{direction}' is not an angle or direction keyword"
        ));
    }
}
