//! Per-element visit lifecycle.
//!
//! An element moves through `Idle -> Active -> Suspended -> Active -> Submitted`.
//! Time only accrues while it is `Active`; every other request to accrue is
//! a no-op. Submitting always ends in `Submitted`.

use crate::{ElementId, Millis, TtcMap, on_become_current, on_leave_or_submit};

/// Where an element is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    /// Never shown.
    #[default]
    Idle,

    /// Currently shown; the running span started at `start`.
    Active { start: Millis },

    /// Shown before, then navigated away from or hidden.
    Suspended,

    /// Submitted. Entering again starts a new visit.
    Submitted,
}

/// Ephemeral timing state of a single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementVisit {
    element: ElementId,
    state: VisitState,
    visits: u32,
}

impl ElementVisit {
    pub fn new(element: impl Into<ElementId>) -> Self {
        Self {
            element: element.into(),
            state: VisitState::Idle,
            visits: 0,
        }
    }

    pub fn element(&self) -> &ElementId {
        &self.element
    }

    pub fn state(&self) -> VisitState {
        self.state
    }

    /// True exactly when this element is the one presently shown.
    pub fn is_current(&self) -> bool {
        matches!(self.state, VisitState::Active { .. })
    }

    /// Start of the running span, if active.
    pub fn start_time(&self) -> Option<Millis> {
        match self.state {
            VisitState::Active { start } => Some(start),
            _ => None,
        }
    }

    /// How many times the element has become current.
    pub fn visits(&self) -> u32 {
        self.visits
    }

    /// The element becomes current. Entering while already active keeps the
    /// running span.
    pub fn enter(&mut self, now: Millis) {
        if self.is_current() {
            tracing::trace!(element = %self.element, "already current");
            return;
        }
        let start = on_become_current(&self.element, now);
        self.state = VisitState::Active { start };
        self.visits += 1;
    }

    /// The element stops being current (navigation or page hidden).
    pub fn leave(&mut self, ttc: TtcMap, now: Millis) -> TtcMap {
        self.accrue_and_move(ttc, now, VisitState::Suspended)
    }

    /// The element's value changed while it stays current.
    ///
    /// Accrues the running span and starts a new one at `now`, so repeated
    /// changes never count the same interval twice.
    pub fn record_change(&mut self, ttc: TtcMap, now: Millis) -> TtcMap {
        self.accrue_and_move(ttc, now, VisitState::Active { start: now })
    }

    /// The element is submitted.
    ///
    /// A suspended or idle visit (the page was hidden) is submitted without
    /// adding time.
    pub fn submit(&mut self, ttc: TtcMap, now: Millis) -> TtcMap {
        if self.is_current() {
            return self.accrue_and_move(ttc, now, VisitState::Submitted);
        }
        tracing::trace!(element = %self.element, state = ?self.state, "submitted while not current");
        self.state = VisitState::Submitted;
        ttc
    }

    fn accrue_and_move(&mut self, ttc: TtcMap, now: Millis, next: VisitState) -> TtcMap {
        let VisitState::Active { start } = self.state else {
            tracing::trace!(element = %self.element, state = ?self.state, "not current, no time accrued");
            return ttc;
        };
        self.state = next;
        on_leave_or_submit(ttc, &self.element, now, start)
    }
}
