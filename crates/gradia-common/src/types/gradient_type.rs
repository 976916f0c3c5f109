//! Gradient function kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::GradientError;

/// The gradient function a config renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum GradientType {
    #[default]
    Linear,
    Radial,
    RepeatingLinear,
    RepeatingRadial,
}

impl GradientType {
    /// Detection order when scanning text: repeating variants come first so
    /// `repeating-linear-gradient(` is never read as `linear-gradient(`.
    pub const DETECTION_ORDER: [GradientType; 4] = [
        GradientType::RepeatingLinear,
        GradientType::RepeatingRadial,
        GradientType::Linear,
        GradientType::Radial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradientType::Linear => "linear",
            GradientType::Radial => "radial",
            GradientType::RepeatingLinear => "repeating-linear",
            GradientType::RepeatingRadial => "repeating-radial",
        }
    }

    /// The opening of the function call, e.g. `linear-gradient(`.
    pub fn function_open(&self) -> String {
        format!("{}-gradient(", self.as_str())
    }

    /// Find the first gradient function named in `text`, by detection order.
    pub fn detect(text: &str) -> Option<GradientType> {
        Self::DETECTION_ORDER
            .into_iter()
            .find(|ty| text.contains(&ty.function_open()))
    }
}

impl fmt::Display for GradientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradientType {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "linear" => Ok(GradientType::Linear),
            "radial" => Ok(GradientType::Radial),
            "repeating-linear" => Ok(GradientType::RepeatingLinear),
            "repeating-radial" => Ok(GradientType::RepeatingRadial),
            other => Err(GradientError::MalformedInput(format!(
                "unknown gradient type: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_linear() {
        assert_eq!(GradientType::default(), GradientType::Linear);
    }

    #[test]
    fn from_str_accepts_all_names() {
        for ty in GradientType::DETECTION_ORDER {
            assert_eq!(ty.as_str().parse::<GradientType>().unwrap(), ty);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "conic".parse::<GradientType>().unwrap_err();
        assert!(matches!(err, GradientError::MalformedInput(_)));
    }

    #[test]
    fn function_open_names() {
        assert_eq!(GradientType::Radial.function_open(), "radial-gradient(");
        assert_eq!(
            GradientType::RepeatingLinear.function_open(),
            "repeating-linear-gradient("
        );
    }

    #[test]
    fn detect_prefers_repeating() {
        assert_eq!(
            GradientType::detect("repeating-linear-gradient(red 0%, blue 10%)"),
            Some(GradientType::RepeatingLinear)
        );
        assert_eq!(
            GradientType::detect("repeating-radial-gradient(red 0%, blue 10%)"),
            Some(GradientType::RepeatingRadial)
        );
    }

    #[test]
    fn detect_vendor_prefixed() {
        assert_eq!(
            GradientType::detect("-webkit-radial-gradient(left, red 10%, blue 85%)"),
            Some(GradientType::Radial)
        );
    }

    #[test]
    fn detect_none() {
        assert_eq!(GradientType::detect("conic-gradient(red, blue)"), None);
        assert_eq!(GradientType::detect("linear-gradient"), None);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&GradientType::RepeatingRadial).unwrap();
        assert_eq!(json, "\"repeating-radial\"");
        let ty: GradientType = serde_json::from_str("\"repeating-linear\"").unwrap();
        assert_eq!(ty, GradientType::RepeatingLinear);
    }
}
