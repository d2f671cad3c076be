//! Core types for the survey-elements crate.
//!
//! This crate provides the foundational types shared by every survey element:
//! - `ResponseDocument` and `ResponsePatch` - Collected answers and single-element updates
//! - `TtcMap` and `ElementVisit` - Time-to-complete accumulation and the visit lifecycle
//! - `Element` and `ElementKind` - Read-only element configuration
//! - `SurveyDefinition` and `I18nString` - Survey structure and localized text

mod element_id;
pub use element_id::ElementId;

mod response_value;
pub use response_value::ResponseValue;

mod patch;
pub use patch::{ResponsePatch, build_patch};

mod response_document;
pub use response_document::{ResponseDocument, ResponseError};

mod ttc;
pub use ttc::{Millis, TtcMap, elapsed_since, on_become_current, on_leave_or_submit};

mod clock;
pub use clock::{Clock, ManualClock, MonotonicClock};

mod visit;
pub use visit::{ElementVisit, VisitState};

mod i18n;
pub use i18n::{
    DEFAULT_LANGUAGE, I18nString, SurveyLanguage, create_i18n_string, extract_language_codes,
    get_localized_value,
};

mod element;
pub use element::{
    Direction, Element, ElementKind, MediaTextElement, OpinionScaleElement, PaymentElement,
    ShortTextElement, StripeIntegration, VisualStyle,
};

mod survey_definition;
pub use survey_definition::SurveyDefinition;

mod error;
pub use error::DefinitionError;
