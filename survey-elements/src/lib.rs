//! # survey-elements
//!
//! Survey elements and the respondent session that drives them.
//!
//! This crate provides the presentation contract of the opinion scale, payment
//! and text elements, and a [`SurveySession`] that tracks responses and the
//! time spent on each element (TTC) while a respondent moves through a survey.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use survey_elements::{ScriptedRespondent, SessionOptions, SurveyDefinition, SurveySession};
//!
//! let definition = SurveyDefinition::from_json(json)?;
//! let mut session = SurveySession::with_monotonic_clock(definition, SessionOptions::default());
//!
//! // Any `Respondent` can answer the elements: a UI, a replay, a script.
//! let snapshot = session.run(&mut respondent)?;
//! println!("{}", snapshot.to_json()?);
//! ```
//!
//! ## Elements
//!
//! - Opinion scale: numbers, smileys or stars, optionally color coded
//! - Payment: a priced pay button
//! - Short text and media text: a single text input
//!
//! ## Time to complete
//!
//! Every element accumulates the milliseconds it was current, across visits.
//! Leaving, submitting and (for scale and payment) answering add the elapsed
//! span; a hidden page suspends the running span.

// Re-export all types from survey-elements-types
pub use survey_elements_types::*;

mod currency;
mod editor;
mod error;
mod opinion_scale;
mod payment;
mod respondent;
mod scale;
mod session;
mod summary;
mod text;
mod view;

pub use currency::{SUPPORTED_CURRENCIES, currency_symbol, format_amount, format_currency};
pub use editor::{
    EditorError, ElementUpdate, SCALE_RANGES, apply_update, display_amount,
    parse_display_amount, update_amount_from_input,
};
pub use error::SessionError;
pub use opinion_scale::{OpinionScaleView, ScaleButton, ScaleFace};
pub use payment::{DEFAULT_BUTTON_LABEL, PAID_LABEL, PAYMENT_COMPLETED, PaymentView};
pub use respondent::Respondent;
pub use scale::{
    ColorTier, PALETTE_SIZE, ScaleError, Smiley, SmileyFill, number_color, scale_bucket,
    scale_fraction, smiley_fill, star_filled,
};
pub use session::{
    DEFAULT_REQUIRED_MESSAGE, Progress, SessionOptions, SessionSnapshot, SurveySession,
};
pub use summary::ScaleSummary;
pub use text::TextInputView;
pub use view::{
    ElementBody, ElementEvent, ElementHeader, ElementProps, ElementView, handle_event,
};

// Scripted respondent for running surveys without user interaction
mod test_backend;
pub use test_backend::{ScriptedRespondent, ScriptedRespondentError};
