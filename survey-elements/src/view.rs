//! The element presentation contract.
//!
//! Every element turns read-only configuration plus [`ElementProps`] into a
//! deterministic [`ElementView`], and turns a discrete user action
//! ([`ElementEvent`]) into at most one value for `onChange`.

use survey_elements_types::{
    Direction, Element, ElementId, ElementKind, I18nString, ResponseValue, get_localized_value,
};

use crate::opinion_scale::{self, OpinionScaleView};
use crate::payment::{self, PaymentView};
use crate::scale::ScaleError;
use crate::text::{self, TextInputView};

/// Per-render inputs supplied by the flow controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementProps {
    /// Language to render localized fields in.
    pub language_code: String,

    pub dir: Direction,

    /// The element's current answer, if any.
    pub value: Option<ResponseValue>,

    /// A precomputed validation message, shown next to the control.
    pub error_message: Option<String>,

    /// Text of the required marker. Only media text elements show it.
    pub required_label: Option<String>,

    /// Disabled inputs ignore every action.
    pub disabled: bool,
}

impl ElementProps {
    pub fn new(language_code: impl Into<String>) -> Self {
        Self {
            language_code: language_code.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<ResponseValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn with_dir(mut self, dir: Direction) -> Self {
        self.dir = dir;
        self
    }

    /// Resolve a localized field in this render's language.
    pub fn localize(&self, field: &I18nString) -> String {
        get_localized_value(field, &self.language_code).to_string()
    }
}

/// Headline block shared by all elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementHeader {
    pub element_id: ElementId,
    pub headline: String,
    pub description: Option<String>,
    pub required: bool,
    pub required_label: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

/// The kind-specific part of a view.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementBody {
    OpinionScale(OpinionScaleView),
    Payment(PaymentView),
    ShortText(TextInputView),
    MediaText(TextInputView),
}

/// Everything a presentation layer needs to draw one element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementView {
    pub header: ElementHeader,
    pub dir: Direction,
    pub error_message: Option<String>,
    pub body: ElementBody,
}

impl ElementView {
    /// Build the view of an element.
    pub fn build(element: &Element, props: &ElementProps) -> Result<Self, ScaleError> {
        let mut header = ElementHeader {
            element_id: element.id.clone(),
            headline: props.localize(&element.headline),
            description: element.subheader.as_ref().map(|s| props.localize(s)),
            required: element.required,
            required_label: None,
            image_url: None,
            video_url: None,
        };

        let body = match &element.kind {
            ElementKind::OpinionScale(config) => {
                ElementBody::OpinionScale(opinion_scale::build_view(config, props)?)
            }
            ElementKind::Payment(config) => ElementBody::Payment(payment::build_view(config, props)),
            ElementKind::ShortText(config) => ElementBody::ShortText(text::build_view(
                &element.id,
                config.placeholder.as_ref(),
                props,
            )),
            ElementKind::MediaText(config) => {
                header.image_url = config.image_url.clone();
                header.video_url = config.video_url.clone();
                header.required_label = props.required_label.clone();
                ElementBody::MediaText(text::build_view(
                    &element.id,
                    config.placeholder.as_ref(),
                    props,
                ))
            }
        };

        Ok(Self {
            header,
            dir: props.dir,
            error_message: props.error_message.clone(),
            body,
        })
    }

    pub fn element_id(&self) -> &ElementId {
        &self.header.element_id
    }
}

/// A discrete user action on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementEvent {
    /// A scale option was clicked.
    Select(u32),

    /// The pay button was clicked.
    Pay,

    /// A text input settled on a new value.
    Input(String),
}

/// Translate a user action into the value for `onChange`.
///
/// Returns `None` when the action does not apply to the element or the
/// control ignores it (disabled input, already paid, unknown option).
pub fn handle_event(
    element: &Element,
    props: &ElementProps,
    event: ElementEvent,
) -> Option<ResponseValue> {
    let value = match (&element.kind, event) {
        (ElementKind::OpinionScale(config), ElementEvent::Select(option)) => {
            opinion_scale::handle_select(config, props, option)
        }
        (ElementKind::Payment(_), ElementEvent::Pay) => payment::handle_pay(props),
        (ElementKind::ShortText(_) | ElementKind::MediaText(_), ElementEvent::Input(input)) => {
            text::handle_input(props, input)
        }
        (kind, event) => {
            tracing::debug!(
                element = %element.id,
                kind = kind.type_name(),
                ?event,
                "event does not apply to element"
            );
            None
        }
    };
    if value.is_none() {
        tracing::trace!(element = %element.id, "event ignored");
    }
    value
}
