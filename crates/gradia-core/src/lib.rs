//! Gradient editing core.
//!
//! Models a gradient as an ordered collection of color stops plus a type
//! and direction, and converts it to and from CSS gradient function syntax.
//!
//! # Quick Start
//!
//! ```rust
//! use gradia_core::{EmitOptions, GradientPicker};
//!
//! let mut picker = GradientPicker::default();
//! picker.add_stop(0.0, "#000", false, EmitOptions::default());
//! picker.add_stop(55.0, "white", false, EmitOptions::default());
//! assert_eq!(
//!     picker.value(None, None),
//!     "linear-gradient(90deg, #000 0%, white 55%)"
//! );
//! ```

pub mod codec;
pub mod gradient;
pub mod picker;
pub mod stops;

// Re-export core types for convenience
pub use codec::{decode, format, parse, parse_strict, prefixed_variants, DecodedGradient, ParseOutcome};
pub use gradia_common::{
    EmitOptions, Event, GradientError, GradientType, ListenerId, Stop, StopId,
};
pub use gradient::{GradientConfig, DEFAULT_DIRECTION};
pub use picker::{ColorPicker, GradientPicker, PickerSettings, StyleProbe};
pub use stops::StopCollection;
