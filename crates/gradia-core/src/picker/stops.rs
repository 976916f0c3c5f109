//! Stop editing through the picker: every call is announced on the bus.

use gradia_common::{EmitOptions, Event, GradientError, Stop, StopId};
use tracing::debug;

use super::GradientPicker;

impl GradientPicker {
    /// Add a stop, optionally selecting it.
    pub fn add_stop(
        &mut self,
        position: f64,
        color: impl Into<String>,
        select: bool,
        options: EmitOptions,
    ) -> StopId {
        let previous = self.config.stops.selected().map(|s| s.id);
        let id = self.config.stops.add(position, color, select);
        self.attach_color_picker(id);

        self.notify(options, Event::StopAdded(id));
        if select {
            if let Some(previous) = previous {
                self.notify(options, Event::StopDeselected(previous));
            }
            self.notify(options, Event::StopSelected(id));
        }
        self.change(true, options);
        id
    }

    /// Add and select a stop at a point on the track, if the point lies
    /// within the picker's `[min, max]` bounds.
    pub fn add_stop_on_track(
        &mut self,
        percentage: f64,
        color: impl Into<String>,
        options: EmitOptions,
    ) -> Option<StopId> {
        if !(self.min..=self.max).contains(&percentage) {
            debug!(percentage, min = self.min, max = self.max, "click outside track");
            return None;
        }
        Some(self.add_stop(percentage, color, true, options))
    }

    pub fn remove_stop(&mut self, id: StopId, options: EmitOptions) -> Result<Stop, GradientError> {
        let stop = self.config.stops.remove(id)?;
        self.notify(options, Event::StopRemoved(stop.clone()));
        self.change(true, options);
        Ok(stop)
    }

    pub fn set_stop_color(
        &mut self,
        id: StopId,
        color: impl Into<String>,
        complete: bool,
        options: EmitOptions,
    ) -> Result<(), GradientError> {
        self.config.stops.set_color(id, color)?;
        self.notify(options, Event::StopColorChanged { id, complete });
        self.change(complete, options);
        Ok(())
    }

    /// Move a stop. Pass `complete = false` for intermediate drag positions.
    pub fn set_stop_position(
        &mut self,
        id: StopId,
        position: f64,
        complete: bool,
        options: EmitOptions,
    ) -> Result<(), GradientError> {
        self.config.stops.set_position(id, position)?;
        self.notify(options, Event::StopPositionChanged { id, complete });
        self.change(complete, options);
        Ok(())
    }

    /// Select a stop, deselecting the rest. Selection does not change the
    /// gradient value, so no `Change` is emitted.
    pub fn select_stop(&mut self, id: StopId, options: EmitOptions) -> Result<(), GradientError> {
        let was_selected = self.config.stops.find(id).is_some_and(|s| s.selected);
        let previous = self.config.stops.select(id)?;
        if let Some(previous) = previous {
            self.notify(options, Event::StopDeselected(previous));
        }
        if !was_selected {
            self.notify(options, Event::StopSelected(id));
        }
        Ok(())
    }

    pub fn deselect_stop(&mut self, id: StopId, options: EmitOptions) -> Result<(), GradientError> {
        if self.config.stops.deselect(id)? {
            self.notify(options, Event::StopDeselected(id));
        }
        Ok(())
    }

    /// Remove every stop, last-added first.
    pub fn clear(&mut self, options: EmitOptions) {
        let removed = self.config.stops.clear();
        self.announce_removed(removed, options);
        self.change(true, options);
    }

    pub fn stop(&self, index: usize) -> Option<&Stop> {
        self.config.stops.get(index)
    }

    pub fn find_stop(&self, id: StopId) -> Option<&Stop> {
        self.config.stops.find(id)
    }

    /// All stops in insertion order.
    pub fn stops(&self) -> &[Stop] {
        self.config.stops.all()
    }

    pub fn selected(&self) -> Option<&Stop> {
        self.config.stops.selected()
    }

    pub(super) fn announce_removed(&mut self, removed: Vec<Stop>, options: EmitOptions) {
        for stop in removed {
            self.notify(options, Event::StopRemoved(stop));
        }
    }

    pub(super) fn attach_color_picker(&mut self, id: StopId) {
        if let (Some(picker), Some(stop)) = (self.color_picker.as_mut(), self.config.stops.find(id)) {
            picker.attach(stop);
        }
    }
}
