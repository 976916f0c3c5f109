//! Gradient type, direction, and initial value.

use gradia_common::GradientType;
use serde::{Deserialize, Serialize};

/// The `[gradient]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientSection {
    #[serde(rename = "type")]
    pub gradient_type: GradientType,
    pub direction: String,
    /// Gradient string to load at startup. Takes precedence over `[[stops]]`.
    pub value: String,
}

impl Default for GradientSection {
    fn default() -> Self {
        Self {
            gradient_type: GradientType::Linear,
            direction: "90deg".into(),
            value: String::new(),
        }
    }
}
