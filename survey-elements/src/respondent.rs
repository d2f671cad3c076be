use crate::view::{ElementEvent, ElementView};

/// Something that answers survey elements: a UI, a replay, a test script.
///
/// The session shows the respondent one element at a time and applies the
/// returned actions in order before submitting the element.
pub trait Respondent {
    /// The error type for this respondent.
    type Error: Into<anyhow::Error>;

    /// Answer the element described by `view`.
    ///
    /// # Returns
    /// * `Ok(events)` with the actions taken on the element (may be empty)
    /// * `Err` on cancellation or respondent failure
    fn respond(&mut self, view: &ElementView) -> Result<Vec<ElementEvent>, Self::Error>;
}
