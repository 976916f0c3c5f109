//! Reading and writing the gradient as a string.

use gradia_common::{EmitOptions, Event, GradientError, GradientType};

use super::{GradientPicker, StyleProbe};
use crate::codec::{self, ParseOutcome};

impl GradientPicker {
    /// The full gradient string, e.g. `linear-gradient(90deg, #000 0%, white 55%)`.
    pub fn value(&self, gradient_type: Option<GradientType>, direction: Option<&str>) -> String {
        codec::format(&self.config, gradient_type, direction)
    }

    /// The color list only, e.g. `#000 0%, white 55%`.
    pub fn color_value(&self) -> String {
        self.config.stops.color_list_string()
    }

    pub fn prefixed_values(
        &self,
        gradient_type: Option<GradientType>,
        direction: Option<&str>,
    ) -> [String; 4] {
        codec::prefixed_variants(&self.config, gradient_type, direction)
    }

    /// The first of the unprefixed value and its vendor variants that
    /// `probe` accepts. Empty when there are no stops or nothing is accepted.
    pub fn safe_value(
        &self,
        probe: &mut dyn StyleProbe,
        gradient_type: Option<GradientType>,
        direction: Option<&str>,
    ) -> String {
        let value = self.value(gradient_type, direction);
        if value.is_empty() {
            return value;
        }
        let prefixed = self.prefixed_values(gradient_type, direction);
        std::iter::once(value)
            .chain(prefixed)
            .find(|candidate| probe.accepts(candidate))
            .unwrap_or_default()
    }

    /// The value used for a horizontal preview strip.
    pub fn preview_value(&self, probe: &mut dyn StyleProbe) -> String {
        self.safe_value(probe, Some(GradientType::Linear), Some("to right"))
    }

    /// Replace the picker's state with a parsed gradient string.
    ///
    /// Non-numeric positions are kept as `NaN`.
    pub fn set_value(&mut self, text: &str, options: EmitOptions) -> ParseOutcome {
        let outcome = codec::parse(&mut self.config, text);
        self.announce_parse(&outcome, options);
        outcome
    }

    /// Like [`set_value`](Self::set_value) but rejects non-numeric
    /// positions, leaving the picker untouched and emitting nothing.
    pub fn set_value_strict(
        &mut self,
        text: &str,
        options: EmitOptions,
    ) -> Result<ParseOutcome, GradientError> {
        let outcome = codec::parse_strict(&mut self.config, text)?;
        self.announce_parse(&outcome, options);
        Ok(outcome)
    }

    pub fn set_direction(&mut self, direction: impl Into<String>, options: EmitOptions) {
        self.config.direction = direction.into();
        let direction = self.config.direction.clone();
        self.notify(options, Event::DirectionChanged(direction));
        self.change(true, options);
    }

    pub fn set_type(&mut self, gradient_type: GradientType, options: EmitOptions) {
        self.config.gradient_type = gradient_type;
        self.notify(options, Event::TypeChanged(gradient_type));
        self.change(true, options);
    }

    fn announce_parse(&mut self, outcome: &ParseOutcome, options: EmitOptions) {
        self.announce_removed(outcome.removed.clone(), options);
        if outcome.applied {
            let direction = self.config.direction.clone();
            self.notify(options, Event::DirectionChanged(direction));
            self.notify(options, Event::TypeChanged(self.config.gradient_type));
        }
        for &id in &outcome.added {
            self.attach_color_picker(id);
            self.notify(options, Event::StopAdded(id));
        }
        self.change(true, options);
    }
}
