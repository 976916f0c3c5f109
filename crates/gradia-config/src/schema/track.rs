//! Track bounds for placing stops.

use serde::{Deserialize, Serialize};

/// The `[track]` section: where stops may be placed from the track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    pub min: f64,
    pub max: f64,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self { min: 0.0, max: 100.0 }
    }
}
