//! Picker state, settings, and the capabilities callers can inject.

use gradia_common::{EventBus, GradientType, Stop};
use std::fmt;

use crate::gradient::{GradientConfig, DEFAULT_DIRECTION};

/// Initial state and track bounds for a picker.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerSettings {
    pub gradient_type: GradientType,
    pub direction: String,
    /// Lowest position a stop can be placed at from the track.
    pub min: f64,
    /// Highest position a stop can be placed at from the track.
    pub max: f64,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            gradient_type: GradientType::Linear,
            direction: DEFAULT_DIRECTION.into(),
            min: 0.0,
            max: 100.0,
        }
    }
}

/// A color-picker widget that gets attached to stops as they are created.
pub trait ColorPicker {
    fn attach(&mut self, stop: &Stop);
}

impl<F: FnMut(&Stop)> ColorPicker for F {
    fn attach(&mut self, stop: &Stop) {
        self(stop)
    }
}

/// Asks the rendering environment whether it understands a style value.
pub trait StyleProbe {
    fn accepts(&mut self, value: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> StyleProbe for F {
    fn accepts(&mut self, value: &str) -> bool {
        self(value)
    }
}

/// A gradient config plus its listeners and injected capabilities.
///
/// All edits should go through the picker so that every mutation is
/// announced on its event bus.
pub struct GradientPicker {
    pub(super) config: GradientConfig,
    pub(super) min: f64,
    pub(super) max: f64,
    pub(super) bus: EventBus,
    pub(super) color_picker: Option<Box<dyn ColorPicker>>,
}

impl GradientPicker {
    pub fn new(settings: PickerSettings) -> Self {
        Self {
            config: GradientConfig::new(settings.gradient_type, settings.direction),
            min: settings.min,
            max: settings.max,
            bus: EventBus::new(),
            color_picker: None,
        }
    }

    pub fn config(&self) -> &GradientConfig {
        &self.config
    }

    pub fn gradient_type(&self) -> GradientType {
        self.config.gradient_type
    }

    pub fn direction(&self) -> &str {
        &self.config.direction
    }

    /// Track bounds as `(min, max)`.
    pub fn track(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn set_color_picker(&mut self, picker: impl ColorPicker + 'static) {
        self.color_picker = Some(Box::new(picker));
    }
}

impl Default for GradientPicker {
    fn default() -> Self {
        Self::new(PickerSettings::default())
    }
}

impl fmt::Debug for GradientPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradientPicker")
            .field("config", &self.config)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("bus", &self.bus)
            .field("color_picker", &self.color_picker.is_some())
            .finish()
    }
}
