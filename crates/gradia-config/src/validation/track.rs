//! `[track]` validation.

use crate::schema::GradiaConfig;

use super::helpers::validate_finite;

pub(crate) fn validate_track(errors: &mut Vec<String>, config: &GradiaConfig) {
    let track = &config.track;
    validate_finite(errors, "track.min", track.min);
    validate_finite(errors, "track.max", track.max);
    if track.min.is_finite() && track.max.is_finite() && track.min >= track.max {
        errors.push(format!(
            "track.min = {} must be below track.max = {}",
            track.min, track.max
        ));
    }
}
