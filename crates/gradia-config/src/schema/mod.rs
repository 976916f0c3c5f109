//! Configuration schema types for Gradia.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod gradient;
mod stops;
mod track;

pub use gradient::*;
pub use stops::*;
pub use track::*;

use serde::{Deserialize, Serialize};

/// Root configuration for a gradient picker.
///
/// Only override what you want to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GradiaConfig {
    pub gradient: GradientSection,
    pub track: TrackConfig,
    pub stops: Vec<StopConfig>,
}
