//! A single color stop.

use serde::{Deserialize, Serialize};

use crate::id::StopId;

/// One color/position pair on the gradient track.
///
/// The color is opaque text (`#000`, `white`, `rgba(1, 2, 3, 0.5)`, ...) and
/// is never interpreted here. The position is a percentage and is not
/// clamped; `NaN` is a legal value produced by tolerant parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: StopId,
    pub position: f64,
    pub color: String,
    pub selected: bool,
}

impl Stop {
    /// Create an unselected stop.
    pub fn new(id: StopId, position: f64, color: impl Into<String>) -> Self {
        Self {
            id,
            position,
            color: color.into(),
            selected: false,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// The stop as it appears in a gradient color list, e.g. `black 0%`.
    pub fn value(&self) -> String {
        format!("{} {}%", self.color, format_position(self.position))
    }
}

/// Render a position the way gradient strings expect numbers to look:
/// `55`, `31.25`, `NaN`, `Infinity`, `1e+21`. Negative zero renders as `0`.
pub fn format_position(position: f64) -> String {
    if position.is_nan() {
        return "NaN".into();
    }
    if position.is_infinite() {
        return if position > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if position == 0.0 {
        return "0".into();
    }

    let magnitude = position.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{position:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }

    format!("{position}")
}
