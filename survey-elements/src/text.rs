//! Text input elements, with and without media.

use survey_elements_types::{ElementId, I18nString, ResponseValue};

use crate::view::ElementProps;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputView {
    /// Id of the input control; the element id.
    pub input_id: ElementId,
    pub placeholder: Option<String>,
    pub value: String,
    pub disabled: bool,
    /// Set when an error message is shown.
    pub invalid: bool,
}

pub(crate) fn build_view(
    element: &ElementId,
    placeholder: Option<&I18nString>,
    props: &ElementProps,
) -> TextInputView {
    TextInputView {
        input_id: element.clone(),
        placeholder: placeholder.map(|p| props.localize(p)),
        value: props
            .value
            .as_ref()
            .and_then(ResponseValue::as_str)
            .unwrap_or_default()
            .to_string(),
        disabled: props.disabled,
        invalid: props.error_message.is_some(),
    }
}

pub(crate) fn handle_input(props: &ElementProps, input: String) -> Option<ResponseValue> {
    if props.disabled {
        return None;
    }
    Some(ResponseValue::String(input))
}
