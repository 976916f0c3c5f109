//! Initial stops.

use serde::{Deserialize, Serialize};

/// One `[[stops]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopConfig {
    pub position: f64,
    pub color: String,
    #[serde(default)]
    pub selected: bool,
}
