//! `[[stops]]` validation.

use crate::schema::GradiaConfig;

use super::helpers::{validate_finite, validate_non_empty};

pub(crate) fn validate_stops(errors: &mut Vec<String>, config: &GradiaConfig) {
    for (i, stop) in config.stops.iter().enumerate() {
        validate_finite(errors, &format!("stops[{i}].position"), stop.position);
        validate_non_empty(errors, &format!("stops[{i}].color"), &stop.color);
    }

    let selected = config.stops.iter().filter(|s| s.selected).count();
    if selected > 1 {
        errors.push(format!(
            "stops: {selected} stops are selected, at most one may be"
        ));
    }
}
