use serde::{Deserialize, Serialize};

use crate::{ElementId, I18nString};

/// Text direction of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
    #[default]
    Auto,
}

/// A single element (question) of a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Key of this element in the response document and the TTC map.
    pub id: ElementId,

    /// The question text.
    pub headline: I18nString,

    /// Optional description shown below the headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheader: Option<I18nString>,

    /// Whether an answer is needed before moving on.
    #[serde(default)]
    pub required: bool,

    /// What kind of element this is, with its kind-specific configuration.
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    /// Create a new optional element without description.
    pub fn new(id: impl Into<ElementId>, headline: I18nString, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            headline,
            subheader: None,
            required: false,
            kind,
        }
    }

    /// Set the description.
    pub fn with_subheader(mut self, subheader: I18nString) -> Self {
        self.subheader = Some(subheader);
        self
    }

    /// Mark the element as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut ElementKind {
        &mut self.kind
    }
}

/// The kind of element, determining its view and the values it emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ElementKind {
    /// Ordinal scale rendered as numbers, smileys or stars.
    OpinionScale(OpinionScaleElement),

    /// A fixed-price payment step.
    Payment(PaymentElement),

    /// Single-line text input.
    ShortText(ShortTextElement),

    /// Single-line text input with an image or video above the headline.
    MediaText(MediaTextElement),
}

impl ElementKind {
    /// Whether a value change also accrues time to complete.
    ///
    /// Click-style elements time every change; text elements only time the
    /// submit, since every keystroke is a change.
    pub fn accrues_on_change(&self) -> bool {
        matches!(self, Self::OpinionScale(_) | Self::Payment(_))
    }

    /// Get the type name of this kind for errors and logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::OpinionScale(_) => "OpinionScale",
            Self::Payment(_) => "Payment",
            Self::ShortText(_) => "ShortText",
            Self::MediaText(_) => "MediaText",
        }
    }
}

/// How an opinion scale presents its options. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualStyle {
    #[default]
    Number,
    Smiley,
    Star,
}

/// Configuration of an opinion scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpinionScaleElement {
    /// Number of options, counted from 1.
    pub scale_range: u32,

    /// Label under the lowest option.
    pub lower_label: I18nString,

    /// Label under the highest option.
    pub upper_label: I18nString,

    #[serde(default)]
    pub visual_style: VisualStyle,

    /// Tint options from negative to positive.
    #[serde(default)]
    pub is_color_coding_enabled: bool,
}

impl OpinionScaleElement {
    pub fn new(scale_range: u32, lower_label: I18nString, upper_label: I18nString) -> Self {
        Self {
            scale_range,
            lower_label,
            upper_label,
            visual_style: VisualStyle::default(),
            is_color_coding_enabled: false,
        }
    }

    pub fn with_visual_style(mut self, visual_style: VisualStyle) -> Self {
        self.visual_style = visual_style;
        self
    }

    pub fn with_color_coding(mut self, enabled: bool) -> Self {
        self.is_color_coding_enabled = enabled;
        self
    }
}

/// Stripe settings of a payment element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StripeIntegration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_id: Option<String>,
}

/// Configuration of a payment element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentElement {
    /// Lowercase currency code, e.g. `"usd"`.
    pub currency: String,

    /// Price in the currency's smallest unit (cents).
    pub amount: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_label: Option<I18nString>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_integration: Option<StripeIntegration>,
}

impl PaymentElement {
    pub fn new(currency: impl Into<String>, amount: i64) -> Self {
        Self {
            currency: currency.into(),
            amount,
            button_label: None,
            stripe_integration: None,
        }
    }

    pub fn with_button_label(mut self, label: I18nString) -> Self {
        self.button_label = Some(label);
        self
    }
}

/// Configuration of a short text input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortTextElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<I18nString>,
}

/// Configuration of a text input with media.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTextElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<I18nString>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}
