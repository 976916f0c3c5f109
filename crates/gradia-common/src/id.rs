use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a stop inside one collection. Never reused by that collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StopId(pub u64);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop-{}", self.0)
    }
}

/// Monotonic allocator for [`StopId`]s.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopIdSequence {
    next: u64,
}

impl StopIdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> StopId {
        let id = StopId(self.next);
        self.next += 1;
        id
    }

    /// Moves the counter past `id` so it is never handed out again.
    pub fn skip_past(&mut self, id: StopId) {
        self.next = self.next.max(id.0.saturating_add(1));
    }
}
