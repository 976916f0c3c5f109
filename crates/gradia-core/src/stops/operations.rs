//! Mutating operations on StopCollection: add, remove, select, edit, clear.

use gradia_common::{GradientError, Stop, StopId};
use tracing::trace;

use super::StopCollection;

impl StopCollection {
    /// Append a stop. With `select`, it becomes the only selected stop.
    ///
    /// Positions are not range-checked; negative or out-of-track values are
    /// stored as given.
    pub fn add(&mut self, position: f64, color: impl Into<String>, select: bool) -> StopId {
        let id = self.ids.next_id();
        self.stops.push(Stop::new(id, position, color));
        if select {
            self.mark_selected(id);
        }
        trace!(%id, position, "stop added");
        id
    }

    /// Remove a stop and hand it back.
    pub fn remove(&mut self, id: StopId) -> Result<Stop, GradientError> {
        let idx = self.index_of(id).ok_or(GradientError::NotFound(id))?;
        trace!(%id, "stop removed");
        Ok(self.stops.remove(idx))
    }

    /// Select `id` and deselect every other stop. Returns the stop that lost
    /// the selection, if the selection moved.
    pub fn select(&mut self, id: StopId) -> Result<Option<StopId>, GradientError> {
        if !self.contains(id) {
            return Err(GradientError::NotFound(id));
        }
        Ok(self.mark_selected(id))
    }

    /// Clear the selection if `id` holds it. Returns whether it did.
    pub fn deselect(&mut self, id: StopId) -> Result<bool, GradientError> {
        let stop = self.stop_mut(id)?;
        let was_selected = stop.selected;
        stop.selected = false;
        Ok(was_selected)
    }

    pub fn set_color(&mut self, id: StopId, color: impl Into<String>) -> Result<(), GradientError> {
        self.stop_mut(id)?.color = color.into();
        Ok(())
    }

    pub fn set_position(&mut self, id: StopId, position: f64) -> Result<(), GradientError> {
        self.stop_mut(id)?.position = position;
        Ok(())
    }

    /// Remove every stop, last-added first. The result is in removal order.
    pub fn clear(&mut self) -> Vec<Stop> {
        let mut removed = Vec::with_capacity(self.stops.len());
        while let Some(stop) = self.stops.pop() {
            removed.push(stop);
        }
        removed
    }

    fn stop_mut(&mut self, id: StopId) -> Result<&mut Stop, GradientError> {
        self.stops
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(GradientError::NotFound(id))
    }

    fn mark_selected(&mut self, id: StopId) -> Option<StopId> {
        let mut previous = None;
        for stop in self.stops.iter_mut() {
            if stop.id == id {
                stop.selected = true;
            } else if stop.selected {
                stop.selected = false;
                previous = Some(stop.id);
            }
        }
        previous
    }
}
