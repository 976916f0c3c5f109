//! Building a picker from loaded configuration.

use gradia_config::GradiaConfig;
use gradia_core::{EmitOptions, GradientPicker, PickerSettings};
use tracing::debug;

/// A picker seeded from config: either the configured gradient string or
/// the `[[stops]]` list. Seeding is silent.
pub fn picker_from_config(config: &GradiaConfig) -> GradientPicker {
    let mut picker = GradientPicker::new(PickerSettings {
        gradient_type: config.gradient.gradient_type,
        direction: config.gradient.direction.clone(),
        min: config.track.min,
        max: config.track.max,
    });

    let quiet = EmitOptions::silent();
    if !config.gradient.value.trim().is_empty() {
        picker.set_value(&config.gradient.value, quiet);
    } else {
        for stop in &config.stops {
            picker.add_stop(stop.position, stop.color.clone(), stop.selected, quiet);
        }
    }

    debug!(stops = picker.stops().len(), "picker seeded from config");
    picker
}

/// Split `"<color> <position>"` at its last space.
pub fn parse_stop_arg(arg: &str) -> Option<(String, f64)> {
    let (color, position) = arg.trim().rsplit_once(' ')?;
    let position = position.trim_end_matches('%').parse::<f64>().ok()?;
    let color = color.trim();
    if color.is_empty() {
        return None;
    }
    Some((color.to_string(), position))
}
