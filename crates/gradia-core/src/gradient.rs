//! The complete state of one gradient.

use gradia_common::{GradientError, GradientType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::stops::StopCollection;

pub const DEFAULT_DIRECTION: &str = "90deg";

/// Type, direction and stops: everything needed to render or serialize one
/// gradient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientConfig {
    #[serde(rename = "type")]
    pub gradient_type: GradientType,
    pub direction: String,
    pub stops: StopCollection,
}

impl GradientConfig {
    pub fn new(gradient_type: GradientType, direction: impl Into<String>) -> Self {
        Self {
            gradient_type,
            direction: direction.into(),
            stops: StopCollection::new(),
        }
    }
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self::new(GradientType::default(), DEFAULT_DIRECTION)
    }
}

impl fmt::Display for GradientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::format(self, None, None))
    }
}

impl FromStr for GradientConfig {
    type Err = GradientError;

    /// Tolerant parse into a default config; never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = GradientConfig::default();
        codec::parse(&mut config, s);
        Ok(config)
    }
}
