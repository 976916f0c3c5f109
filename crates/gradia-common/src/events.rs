use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::StopId;
use crate::types::{GradientType, Stop};

/// Notifications emitted by a gradient picker.
///
/// Fine-grained events describe what changed; `Change` is emitted once per
/// mutating call after them. `complete` is `false` for in-progress edits
/// such as a drag that has not been released yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    StopAdded(StopId),
    StopRemoved(Stop),
    StopColorChanged { id: StopId, complete: bool },
    StopPositionChanged { id: StopId, complete: bool },
    StopSelected(StopId),
    StopDeselected(StopId),
    TypeChanged(GradientType),
    DirectionChanged(String),
    Change { complete: bool },
}

/// Per-call emission options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Suppress every notification for this call.
    pub silent: bool,
}

impl EmitOptions {
    pub fn silent() -> Self {
        Self { silent: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&Event)>;

/// Synchronous listener registry. Listeners run inline, in registration
/// order, on the thread that publishes.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Event) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `true` if the listener was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every listener. Returns how many were called.
    pub fn publish(&mut self, event: &Event) -> usize {
        tracing::trace!(?event, listeners = self.listeners.len(), "publish");
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
        self.listeners.len()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(bus: &mut EventBus) -> Rc<RefCell<Vec<Event>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        bus.subscribe(move |e| sink.borrow_mut().push(e.clone()));
        seen
    }

    #[test]
    fn publish_and_receive() {
        let mut bus = EventBus::new();
        let seen = recorder(&mut bus);

        bus.publish(&Event::Change { complete: true });

        assert_eq!(*seen.borrow(), vec![Event::Change { complete: true }]);
    }

    #[test]
    fn multiple_listeners_in_order() {
        let mut bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let a = Rc::clone(&order);
        let b = Rc::clone(&order);
        bus.subscribe(move |_| a.borrow_mut().push("a"));
        bus.subscribe(move |_| b.borrow_mut().push("b"));

        let count = bus.publish(&Event::StopAdded(StopId(0)));

        assert_eq!(count, 2);
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn publish_returns_zero_with_no_listeners() {
        let mut bus = EventBus::new();
        assert_eq!(bus.publish(&Event::Change { complete: false }), 0);
        assert!(bus.is_empty());
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut bus = EventBus::new();
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        let id = bus.subscribe(move |_| *sink.borrow_mut() += 1);

        bus.publish(&Event::Change { complete: true });
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(&Event::Change { complete: true });

        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn silent_options() {
        assert!(EmitOptions::silent().silent);
        assert!(!EmitOptions::default().silent);
    }

    #[test]
    fn event_serialization() {
        let event = Event::StopColorChanged {
            id: StopId(2),
            complete: false,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"StopColorChanged\""));
        let restored: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, event);
    }
}
