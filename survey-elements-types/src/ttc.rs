//! Time-to-complete accumulation.
//!
//! Every element accumulates the milliseconds a respondent spends on it while
//! it is the current element. Revisiting an element adds a new span instead
//! of replacing the old one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ElementId;

/// A monotonic timestamp or duration in milliseconds.
pub type Millis = u64;

/// Accumulated active time per element.
///
/// Values only ever grow: the sole mutation is adding a non-negative span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TtcMap {
    entries: BTreeMap<ElementId, Millis>,
}

impl TtcMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Accumulated time of an element. Missing entries read as 0.
    pub fn get(&self, element: &ElementId) -> Millis {
        self.entries.get(element).copied().unwrap_or(0)
    }

    /// Check if an element has an entry.
    pub fn contains(&self, element: &ElementId) -> bool {
        self.entries.contains_key(element)
    }

    /// Add a span to an element's accumulated time.
    pub fn add(&mut self, element: impl Into<ElementId>, elapsed: Millis) {
        let total = self.entries.entry(element.into()).or_insert(0);
        *total = total.saturating_add(elapsed);
    }

    /// Consume the map and return it with a span added to one element.
    pub fn with_elapsed(mut self, element: impl Into<ElementId>, elapsed: Millis) -> Self {
        self.add(element, elapsed);
        self
    }

    /// Sum over all elements.
    pub fn total(&self) -> Millis {
        self.entries
            .values()
            .fold(0, |acc, &ms| acc.saturating_add(ms))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, Millis)> {
        self.entries.iter().map(|(id, &ms)| (id, ms))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ElementId, Millis)> for TtcMap {
    fn from_iter<I: IntoIterator<Item = (ElementId, Millis)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (element, elapsed) in iter {
            map.add(element, elapsed);
        }
        map
    }
}

/// Elapsed time between `start` and `now`, clamped at zero.
pub fn elapsed_since(start: Millis, now: Millis) -> Millis {
    if start > now {
        tracing::warn!(start, now, "start time is ahead of the clock, counting 0 ms");
        return 0;
    }
    now - start
}

/// Called when an element becomes the one currently displayed.
///
/// Returns the new start marker. The accumulated map is not touched.
pub fn on_become_current(element: &ElementId, now: Millis) -> Millis {
    tracing::trace!(%element, now, "element became current");
    now
}

/// Called when an element loses focus or is submitted.
///
/// Adds `max(0, now - start)` to the element's entry and returns the updated
/// map. All other entries are unchanged.
pub fn on_leave_or_submit(ttc: TtcMap, element: &ElementId, now: Millis, start: Millis) -> TtcMap {
    let elapsed = elapsed_since(start, now);
    tracing::debug!(%element, elapsed, "accruing time to complete");
    ttc.with_elapsed(element, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entries_read_as_zero() {
        let ttc = TtcMap::new();
        assert_eq!(ttc.get(&ElementId::new("q1")), 0);
        assert!(!ttc.contains(&ElementId::new("q1")));
    }

    #[test]
    fn leave_adds_elapsed_span() {
        let q1 = ElementId::new("q1");
        let start = on_become_current(&q1, 1_000);
        assert_eq!(start, 1_000);

        let ttc = on_leave_or_submit(TtcMap::new(), &q1, 1_750, start);
        assert_eq!(ttc.get(&q1), 750);
    }

    #[test]
    fn other_entries_untouched() {
        let q1 = ElementId::new("q1");
        let q2 = ElementId::new("q2");
        let ttc = TtcMap::new().with_elapsed(&q2, 300);

        let ttc = on_leave_or_submit(ttc, &q1, 500, 100);
        assert_eq!(ttc.get(&q1), 400);
        assert_eq!(ttc.get(&q2), 300);
        assert_eq!(ttc.total(), 700);
    }

    #[test]
    fn clock_anomaly_contributes_zero() {
        let q1 = ElementId::new("q1");
        let ttc = TtcMap::new().with_elapsed(&q1, 50);

        let ttc = on_leave_or_submit(ttc, &q1, 100, 900);
        assert_eq!(ttc.get(&q1), 50);
    }

    #[test]
    fn spans_accumulate_across_visits() {
        let q1 = ElementId::new("q1");
        let ttc = on_leave_or_submit(TtcMap::new(), &q1, 1_200, 1_000);
        let ttc = on_leave_or_submit(ttc, &q1, 5_300, 5_000);
        assert_eq!(ttc.get(&q1), 500);
    }

    #[test]
    fn serializes_as_plain_object() {
        let ttc = TtcMap::new().with_elapsed("q1", 1200).with_elapsed("q2", 80);
        assert_eq!(
            serde_json::to_string(&ttc).unwrap(),
            r#"{"q1":1200,"q2":80}"#
        );
    }
}
