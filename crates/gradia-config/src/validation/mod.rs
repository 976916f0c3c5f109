//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod gradient;
mod helpers;
mod stops;
mod track;

#[cfg(test)]
mod tests;

pub use gradient::is_valid_direction;

use crate::schema::GradiaConfig;
use gradia_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GradiaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    gradient::validate_gradient(&mut errors, config);
    track::validate_track(&mut errors, config);
    stops::validate_stops(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
