use survey_elements_types::ElementId;

use crate::scale::ScaleError;

/// Error type for survey session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// `start` has not been called yet.
    #[error("Survey session has not started")]
    NotStarted,

    /// Every element has been submitted.
    #[error("Survey session is finished")]
    Finished,

    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),

    /// A required element was submitted without an answer.
    #[error("Element '{0}' requires an answer")]
    Required(ElementId),

    #[error("Already at the first element")]
    NoPreviousElement,

    /// The element's configuration cannot be rendered.
    #[error(transparent)]
    Scale(#[from] ScaleError),

    #[error("Invalid session snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// The respondent driving the session failed.
    #[error("Respondent error: {0}")]
    Respondent(#[from] anyhow::Error),
}

impl SessionError {
    /// Create a respondent error from any error type.
    pub fn respondent(err: impl Into<anyhow::Error>) -> Self {
        Self::Respondent(err.into())
    }

    /// Check if this error is a missing required answer.
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required(_))
    }
}
