//! Scripted respondent for running surveys without user interaction.
//!
//! `ScriptedRespondent` answers each element with pre-defined actions and can
//! advance a shared `ManualClock` to simulate time spent on an element.
//!
//! # Example
//!
//! ```rust,ignore
//! use survey_elements::{ManualClock, ScriptedRespondent, SessionOptions, SurveySession};
//!
//! let clock = ManualClock::new(0);
//! let mut respondent = ScriptedRespondent::new()
//!     .with_clock(clock.clone())
//!     .with_selection("satisfaction", 4)
//!     .with_dwell("satisfaction", 2_000)
//!     .with_input("comment", "Great service");
//!
//! let mut session = SurveySession::new(definition, SessionOptions::default(), clock);
//! let snapshot = session.run(&mut respondent).unwrap();
//! assert_eq!(snapshot.ttc.get(&"satisfaction".into()), 2_000);
//! ```

use std::collections::HashMap;

use survey_elements_types::{ElementId, ManualClock, Millis};

use crate::respondent::Respondent;
use crate::view::{ElementEvent, ElementView};

/// A respondent that replays pre-configured actions.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRespondent {
    events: HashMap<ElementId, Vec<ElementEvent>>,
    dwell: HashMap<ElementId, Millis>,
    clock: Option<ManualClock>,
    shown: Vec<ElementId>,
}

/// Error type for ScriptedRespondent.
#[derive(Debug, thiserror::Error)]
pub enum ScriptedRespondentError {
    /// A required element was shown that the script has no actions for.
    #[error("No scripted answer for required element: {0}")]
    MissingAnswer(ElementId),
}

impl ScriptedRespondent {
    /// Create a new empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance this clock by each element's dwell time when it is shown.
    pub fn with_clock(mut self, clock: ManualClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Add an action for an element. Actions are applied in insertion order.
    pub fn with_event(mut self, element: impl Into<ElementId>, event: ElementEvent) -> Self {
        self.events.entry(element.into()).or_default().push(event);
        self
    }

    /// Click a scale option.
    pub fn with_selection(self, element: impl Into<ElementId>, option: u32) -> Self {
        self.with_event(element, ElementEvent::Select(option))
    }

    /// Click the pay button.
    pub fn with_payment(self, element: impl Into<ElementId>) -> Self {
        self.with_event(element, ElementEvent::Pay)
    }

    /// Type into a text input.
    pub fn with_input(self, element: impl Into<ElementId>, text: impl Into<String>) -> Self {
        self.with_event(element, ElementEvent::Input(text.into()))
    }

    /// Time spent on an element before acting, per visit.
    pub fn with_dwell(mut self, element: impl Into<ElementId>, millis: Millis) -> Self {
        self.dwell.insert(element.into(), millis);
        self
    }

    /// Elements shown so far, in order.
    pub fn shown(&self) -> &[ElementId] {
        &self.shown
    }
}

impl Respondent for ScriptedRespondent {
    type Error = ScriptedRespondentError;

    fn respond(&mut self, view: &ElementView) -> Result<Vec<ElementEvent>, Self::Error> {
        let element = view.element_id();
        self.shown.push(element.clone());

        if let Some(clock) = &self.clock
            && let Some(&millis) = self.dwell.get(element)
        {
            clock.advance(millis);
        }

        match self.events.get(element) {
            Some(events) => Ok(events.clone()),
            None if view.header.required => {
                Err(ScriptedRespondentError::MissingAnswer(element.clone()))
            }
            None => Ok(Vec::new()),
        }
    }
}
