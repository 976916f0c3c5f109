//! Rendering the color-list fragment of a gradient string.

use gradia_common::Stop;
use std::cmp::Ordering;

use super::StopCollection;

impl StopCollection {
    /// Stops ordered by ascending position. The sort is stable, so equal
    /// positions (including `0` and `-0`) keep insertion order; `NaN`
    /// positions sort last.
    pub fn sorted(&self) -> Vec<&Stop> {
        let mut sorted: Vec<&Stop> = self.stops.iter().collect();
        sorted.sort_by(|l, r| compare_positions(l.position, r.position));
        sorted
    }

    /// The `"<color> <position>%"` list joined by `", "`, by position.
    ///
    /// A lone stop is written twice so the result is still a drawable
    /// two-point gradient. No stops yields an empty string.
    pub fn color_list_string(&self) -> String {
        let sorted = self.sorted();
        let values: Vec<String> = match sorted.as_slice() {
            [] => return String::new(),
            [only] => vec![only.value(), only.value()],
            many => many.iter().map(|s| s.value()).collect(),
        };
        values.join(", ")
    }
}

fn compare_positions(l: f64, r: f64) -> Ordering {
    match (l.is_nan(), r.is_nan()) {
        (false, false) => l.partial_cmp(&r).unwrap_or(Ordering::Equal),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}
