//! Listener registration and notification helpers.

use gradia_common::{EmitOptions, Event, ListenerId};

use super::GradientPicker;

impl GradientPicker {
    /// Register a listener for every event this picker emits.
    pub fn subscribe(&mut self, listener: impl FnMut(&Event) + 'static) -> ListenerId {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Announce a change. `complete` is false while an edit is in progress.
    pub fn change(&mut self, complete: bool, options: EmitOptions) {
        self.notify(options, Event::Change { complete });
    }

    pub(super) fn notify(&mut self, options: EmitOptions, event: Event) {
        if !options.silent {
            self.bus.publish(&event);
        }
    }
}
