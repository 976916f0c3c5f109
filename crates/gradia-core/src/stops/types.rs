//! Core types for the stop collection.

use gradia_common::{GradientError, Stop, StopId, StopIdSequence};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The stops of one gradient, in insertion order.
///
/// Stops are not kept sorted; ordering by position only happens when the
/// color list is rendered. At most one stop is selected at any time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RawStopCollection")]
pub struct StopCollection {
    pub(super) stops: Vec<Stop>,
    pub(super) ids: StopIdSequence,
}

/// Unchecked wire form of [`StopCollection`].
#[derive(Deserialize)]
struct RawStopCollection {
    #[serde(default)]
    stops: Vec<Stop>,
    #[serde(default)]
    ids: StopIdSequence,
}

impl TryFrom<RawStopCollection> for StopCollection {
    type Error = GradientError;

    fn try_from(raw: RawStopCollection) -> Result<Self, Self::Error> {
        let RawStopCollection { stops, mut ids } = raw;

        let selected = stops.iter().filter(|s| s.selected).count();
        if selected > 1 {
            return Err(GradientError::MalformedInput(format!(
                "{selected} stops are selected, at most one is allowed"
            )));
        }

        let mut seen = HashSet::with_capacity(stops.len());
        for stop in &stops {
            if !seen.insert(stop.id) {
                return Err(GradientError::MalformedInput(format!(
                    "duplicate stop id {}",
                    stop.id
                )));
            }
            ids.skip_past(stop.id);
        }

        Ok(Self { stops, ids })
    }
}

impl StopCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stop at an insertion-order index.
    pub fn get(&self, index: usize) -> Option<&Stop> {
        self.stops.get(index)
    }

    /// Stop by handle.
    pub fn find(&self, id: StopId) -> Option<&Stop> {
        self.stops.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: StopId) -> bool {
        self.index_of(id).is_some()
    }

    /// All stops in insertion order.
    pub fn all(&self) -> &[Stop] {
        &self.stops
    }

    pub fn selected(&self) -> Option<&Stop> {
        self.stops.iter().find(|s| s.selected)
    }

    pub(super) fn index_of(&self, id: StopId) -> Option<usize> {
        self.stops.iter().position(|s| s.id == id)
    }
}
