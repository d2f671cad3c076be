//! The survey flow controller.
//!
//! A [`SurveySession`] is the single owner of the `TtcMap` and the
//! `ResponseDocument`. Elements never mutate either directly: they receive
//! read-only props and hand back values, which the session turns into
//! patches and timing updates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use survey_elements_types::{
    Clock, DEFAULT_LANGUAGE, Direction, Element, ElementId, ElementVisit, MonotonicClock,
    ResponseDocument, ResponsePatch, SurveyDefinition, TtcMap, build_patch,
};

use crate::error::SessionError;
use crate::respondent::Respondent;
use crate::view::{ElementEvent, ElementProps, ElementView, handle_event};

/// Message shown on a required element submitted without an answer.
pub const DEFAULT_REQUIRED_MESSAGE: &str = "Please fill out this field.";

/// Presentation settings shared by all elements of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Language to render localized fields in.
    pub language_code: String,
    pub dir: Direction,
    pub required_message: String,
    /// Text of the required marker on media text headers.
    pub required_label: Option<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            language_code: DEFAULT_LANGUAGE.to_string(),
            dir: Direction::Auto,
            required_message: DEFAULT_REQUIRED_MESSAGE.to_string(),
            required_label: Some("Required".to_string()),
        }
    }
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = language_code.into();
        self
    }

    pub fn with_dir(mut self, dir: Direction) -> Self {
        self.dir = dir;
        self
    }

    pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = message.into();
        self
    }

    pub fn with_required_label(mut self, label: Option<String>) -> Self {
        self.required_label = label;
        self
    }
}

/// The persistable part of a session: accumulated time and answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub ttc: TtcMap,
    #[serde(default)]
    pub responses: ResponseDocument,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Outcome of moving forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// This element is now current.
    Next(ElementId),
    /// No elements left.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    NotStarted,
    At(usize),
    Finished,
}

/// Drives a survey one element at a time.
#[derive(Debug)]
pub struct SurveySession<C: Clock = MonotonicClock> {
    definition: SurveyDefinition,
    options: SessionOptions,
    clock: C,
    ttc: TtcMap,
    responses: ResponseDocument,
    /// One per element, in survey order.
    visits: Vec<ElementVisit>,
    errors: BTreeMap<ElementId, String>,
    position: Position,
    hidden: bool,
}

impl SurveySession<MonotonicClock> {
    /// Create a session timed by the system's monotonic clock.
    pub fn with_monotonic_clock(definition: SurveyDefinition, options: SessionOptions) -> Self {
        Self::new(definition, options, MonotonicClock::new())
    }
}

impl<C: Clock> SurveySession<C> {
    pub fn new(definition: SurveyDefinition, options: SessionOptions, clock: C) -> Self {
        let visits = definition
            .elements()
            .iter()
            .map(|element| ElementVisit::new(element.id.clone()))
            .collect();
        Self {
            definition,
            options,
            clock,
            ttc: TtcMap::new(),
            responses: ResponseDocument::new(),
            visits,
            errors: BTreeMap::new(),
            position: Position::NotStarted,
            hidden: false,
        }
    }

    /// Continue a session from previously persisted state.
    ///
    /// `start` then resumes at the first element without an answer.
    pub fn restore(
        definition: SurveyDefinition,
        options: SessionOptions,
        clock: C,
        snapshot: SessionSnapshot,
    ) -> Self {
        let mut session = Self::new(definition, options, clock);
        session.ttc = snapshot.ttc;
        session.responses = snapshot.responses;
        session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            ttc: self.ttc.clone(),
            responses: self.responses.clone(),
        }
    }

    pub fn definition(&self) -> &SurveyDefinition {
        &self.definition
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn ttc(&self) -> &TtcMap {
        &self.ttc
    }

    pub fn responses(&self) -> &ResponseDocument {
        &self.responses
    }

    pub fn is_finished(&self) -> bool {
        self.position == Position::Finished
    }

    pub fn current_element(&self) -> Option<&Element> {
        match self.position {
            Position::At(index) => self.definition.elements().get(index),
            Position::NotStarted | Position::Finished => None,
        }
    }

    pub fn current_element_id(&self) -> Option<&ElementId> {
        self.current_element().map(Element::id)
    }

    pub fn visit(&self, id: &ElementId) -> Option<&ElementVisit> {
        self.definition
            .position(id)
            .and_then(|index| self.visits.get(index))
    }

    /// The validation message currently shown on an element.
    pub fn error_message(&self, id: &ElementId) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    /// Make the first unanswered element current.
    ///
    /// A fresh session starts at the first element; a restored one resumes
    /// at the first element without an answer, or finishes if every element
    /// has one. Calling this on a running session does nothing.
    pub fn start(&mut self) -> Progress {
        if self.position == Position::NotStarted {
            match self.first_unanswered() {
                Some(index) => self.enter(index),
                None => self.position = Position::Finished,
            }
        }
        self.progress()
    }

    fn first_unanswered(&self) -> Option<usize> {
        self.definition
            .elements()
            .iter()
            .position(|element| !self.responses.has_value(&element.id))
    }

    fn progress(&self) -> Progress {
        match self.current_element_id() {
            Some(id) => Progress::Next(id.clone()),
            None => Progress::Finished,
        }
    }

    fn index_of(&self, id: &ElementId) -> Result<usize, SessionError> {
        self.definition
            .position(id)
            .ok_or_else(|| SessionError::UnknownElement(id.clone()))
    }

    fn current_index(&self) -> Result<usize, SessionError> {
        match self.position {
            Position::NotStarted => Err(SessionError::NotStarted),
            Position::At(index) => Ok(index),
            Position::Finished => Err(SessionError::Finished),
        }
    }

    /// Make an element current. While the page is hidden only the position
    /// moves; the visit starts when the page is shown again.
    fn enter(&mut self, index: usize) {
        self.position = Position::At(index);
        if self.hidden {
            tracing::debug!(element = %self.visits[index].element(), "element entered while hidden");
            return;
        }
        let now = self.clock.now_ms();
        self.visits[index].enter(now);
        tracing::debug!(element = %self.visits[index].element(), now, "element entered");
    }

    fn props_at(&self, index: usize) -> ElementProps {
        let id = &self.definition.elements()[index].id;
        ElementProps {
            language_code: self.options.language_code.clone(),
            dir: self.options.dir,
            value: self.responses.get(id).cloned(),
            error_message: self.errors.get(id).cloned(),
            required_label: self.options.required_label.clone(),
            disabled: false,
        }
    }

    /// Props an element is rendered with right now.
    pub fn props(&self, id: &ElementId) -> Result<ElementProps, SessionError> {
        Ok(self.props_at(self.index_of(id)?))
    }

    /// View model of any element.
    pub fn view(&self, id: &ElementId) -> Result<ElementView, SessionError> {
        let index = self.index_of(id)?;
        let element = &self.definition.elements()[index];
        Ok(ElementView::build(element, &self.props_at(index))?)
    }

    /// View model of the current element.
    pub fn current_view(&self) -> Result<ElementView, SessionError> {
        let index = self.current_index()?;
        let element = &self.definition.elements()[index];
        Ok(ElementView::build(element, &self.props_at(index))?)
    }

    /// Apply a user action to the current element.
    ///
    /// Returns the patch merged into the response document, or `None` if the
    /// element ignored the action.
    pub fn dispatch(&mut self, event: ElementEvent) -> Result<Option<ResponsePatch>, SessionError> {
        let index = self.current_index()?;
        Ok(self.dispatch_at(index, event))
    }

    /// Apply a user action to any element.
    ///
    /// The answer is recorded either way; time only accrues if the element is
    /// current.
    pub fn dispatch_to(
        &mut self,
        id: &ElementId,
        event: ElementEvent,
    ) -> Result<Option<ResponsePatch>, SessionError> {
        let index = self.index_of(id)?;
        Ok(self.dispatch_at(index, event))
    }

    fn dispatch_at(&mut self, index: usize, event: ElementEvent) -> Option<ResponsePatch> {
        let element = &self.definition.elements()[index];
        let value = handle_event(element, &self.props_at(index), event)?;
        let accrues = element.kind.accrues_on_change();
        let patch = build_patch(element.id.clone(), value);

        self.responses.merge(patch.clone());
        self.errors.remove(patch.element());
        if accrues {
            let now = self.clock.now_ms();
            self.ttc = self.visits[index].record_change(std::mem::take(&mut self.ttc), now);
        }
        tracing::debug!(element = %patch.element(), value = ?patch.value(), "response updated");
        Some(patch)
    }

    /// Submit the current element and move to the next one.
    ///
    /// A required element without an answer stays current and gets the
    /// required message.
    pub fn submit_current(&mut self) -> Result<Progress, SessionError> {
        let index = self.current_index()?;
        let element = &self.definition.elements()[index];
        let id = element.id.clone();

        if element.required && !self.responses.has_value(&id) {
            tracing::debug!(element = %id, "required element has no answer");
            self.errors
                .insert(id.clone(), self.options.required_message.clone());
            return Err(SessionError::Required(id));
        }
        self.errors.remove(&id);

        let now = self.clock.now_ms();
        self.ttc = self.visits[index].submit(std::mem::take(&mut self.ttc), now);

        if index + 1 < self.definition.len() {
            self.enter(index + 1);
        } else {
            self.position = Position::Finished;
            tracing::info!(
                responses = self.responses.len(),
                total_ttc = self.ttc.total(),
                "survey finished"
            );
        }
        Ok(self.progress())
    }

    /// Leave the current element for the previous one.
    ///
    /// From a finished session this reopens the last element.
    pub fn go_back(&mut self) -> Result<ElementId, SessionError> {
        let target = match self.position {
            Position::NotStarted => return Err(SessionError::NotStarted),
            Position::Finished => self
                .definition
                .len()
                .checked_sub(1)
                .ok_or(SessionError::NoPreviousElement)?,
            Position::At(0) => return Err(SessionError::NoPreviousElement),
            Position::At(index) => {
                let now = self.clock.now_ms();
                self.ttc = self.visits[index].leave(std::mem::take(&mut self.ttc), now);
                index - 1
            }
        };
        self.enter(target);
        Ok(self.definition.elements()[target].id.clone())
    }

    /// The page was hidden; the current element stops accruing time.
    pub fn page_hidden(&mut self) {
        if self.hidden {
            return;
        }
        self.hidden = true;
        if let Position::At(index) = self.position {
            let now = self.clock.now_ms();
            self.ttc = self.visits[index].leave(std::mem::take(&mut self.ttc), now);
        }
    }

    /// The page is visible again; the current element resumes.
    pub fn page_visible(&mut self) {
        if !self.hidden {
            return;
        }
        self.hidden = false;
        if let Position::At(index) = self.position {
            self.enter(index);
        }
    }

    /// Run the whole survey with a respondent.
    ///
    /// Each element is shown, the respondent's actions are applied, then it
    /// is submitted. Returns the final snapshot.
    pub fn run<R: Respondent>(&mut self, respondent: &mut R) -> Result<SessionSnapshot, SessionError> {
        self.start();
        while !self.is_finished() {
            let view = self.current_view()?;
            let events = respondent
                .respond(&view)
                .map_err(SessionError::respondent)?;
            for event in events {
                self.dispatch(event)?;
            }
            self.submit_current()?;
        }
        Ok(self.snapshot())
    }
}
