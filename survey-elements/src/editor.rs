//! Editor-side updates of element configuration.
//!
//! The survey editor changes one attribute at a time. Each change is an
//! [`ElementUpdate`] applied to the element in the definition.

use survey_elements_types::{
    ElementId, ElementKind, I18nString, SurveyDefinition, VisualStyle, create_i18n_string,
};

use crate::currency::{SUPPORTED_CURRENCIES, format_amount};

/// Scale ranges offered by the editor.
pub const SCALE_RANGES: [u32; 3] = [5, 7, 10];

/// A single attribute change made in the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementUpdate {
    Headline(I18nString),
    /// Add an empty description in every survey language, if there is none.
    AddDescription,
    Description(Option<I18nString>),
    Required(bool),

    ScaleRange(u32),
    VisualStyle(VisualStyle),
    ColorCoding(bool),
    LowerLabel(I18nString),
    UpperLabel(I18nString),

    Currency(String),
    /// Price in the smallest currency unit.
    Amount(i64),
    StripePublicKey(String),
    StripePriceId(String),
    ButtonLabel(I18nString),

    Placeholder(Option<I18nString>),
    ImageUrl(Option<String>),
    VideoUrl(Option<String>),
}

impl ElementUpdate {
    /// Get the name of the updated attribute for errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Headline(_) => "headline",
            Self::AddDescription | Self::Description(_) => "subheader",
            Self::Required(_) => "required",
            Self::ScaleRange(_) => "scaleRange",
            Self::VisualStyle(_) => "visualStyle",
            Self::ColorCoding(_) => "isColorCodingEnabled",
            Self::LowerLabel(_) => "lowerLabel",
            Self::UpperLabel(_) => "upperLabel",
            Self::Currency(_) => "currency",
            Self::Amount(_) => "amount",
            Self::StripePublicKey(_) => "stripeIntegration.publicKey",
            Self::StripePriceId(_) => "stripeIntegration.priceId",
            Self::ButtonLabel(_) => "buttonLabel",
            Self::Placeholder(_) => "placeholder",
            Self::ImageUrl(_) => "imageUrl",
            Self::VideoUrl(_) => "videoUrl",
        }
    }
}

/// Error type for editor updates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),

    #[error("Unsupported scale range {0}, expected one of 5, 7 or 10")]
    UnsupportedScaleRange(u32),

    #[error("Unsupported currency '{0}'")]
    UnsupportedCurrency(String),

    #[error("Attribute '{update}' does not apply to {kind} elements")]
    NotApplicable {
        update: &'static str,
        kind: &'static str,
    },
}

/// Apply one attribute change to an element of the definition.
pub fn apply_update(
    definition: &mut SurveyDefinition,
    id: &ElementId,
    update: ElementUpdate,
) -> Result<(), EditorError> {
    let language_codes = definition.language_codes();
    let element = definition
        .element_mut(id)
        .ok_or_else(|| EditorError::UnknownElement(id.clone()))?;
    let name = update.name();

    match update {
        ElementUpdate::Headline(headline) => element.headline = headline,
        ElementUpdate::AddDescription => {
            if element.subheader.is_none() {
                element.subheader = Some(create_i18n_string("", &language_codes));
            }
        }
        ElementUpdate::Description(subheader) => element.subheader = subheader,
        ElementUpdate::Required(required) => element.required = required,
        other => apply_kind_update(&mut element.kind, other)?,
    }

    tracing::debug!(element = %id, attribute = name, "element updated");
    Ok(())
}

fn apply_kind_update(kind: &mut ElementKind, update: ElementUpdate) -> Result<(), EditorError> {
    let kind_name = kind.type_name();
    match (kind, update) {
        (ElementKind::OpinionScale(scale), ElementUpdate::ScaleRange(range)) => {
            if !SCALE_RANGES.contains(&range) {
                return Err(EditorError::UnsupportedScaleRange(range));
            }
            scale.scale_range = range;
        }
        (ElementKind::OpinionScale(scale), ElementUpdate::VisualStyle(style)) => {
            scale.visual_style = style;
        }
        (ElementKind::OpinionScale(scale), ElementUpdate::ColorCoding(enabled)) => {
            scale.is_color_coding_enabled = enabled;
        }
        (ElementKind::OpinionScale(scale), ElementUpdate::LowerLabel(label)) => {
            scale.lower_label = label;
        }
        (ElementKind::OpinionScale(scale), ElementUpdate::UpperLabel(label)) => {
            scale.upper_label = label;
        }

        (ElementKind::Payment(payment), ElementUpdate::Currency(currency)) => {
            if !SUPPORTED_CURRENCIES.contains(&currency.as_str()) {
                return Err(EditorError::UnsupportedCurrency(currency));
            }
            payment.currency = currency;
        }
        (ElementKind::Payment(payment), ElementUpdate::Amount(amount)) => payment.amount = amount,
        (ElementKind::Payment(payment), ElementUpdate::StripePublicKey(key)) => {
            payment
                .stripe_integration
                .get_or_insert_with(Default::default)
                .public_key = Some(key);
        }
        (ElementKind::Payment(payment), ElementUpdate::StripePriceId(price)) => {
            payment
                .stripe_integration
                .get_or_insert_with(Default::default)
                .price_id = Some(price);
        }
        (ElementKind::Payment(payment), ElementUpdate::ButtonLabel(label)) => {
            payment.button_label = Some(label);
        }

        (ElementKind::ShortText(text), ElementUpdate::Placeholder(placeholder)) => {
            text.placeholder = placeholder;
        }
        (ElementKind::MediaText(text), ElementUpdate::Placeholder(placeholder)) => {
            text.placeholder = placeholder;
        }
        (ElementKind::MediaText(text), ElementUpdate::ImageUrl(url)) => text.image_url = url,
        (ElementKind::MediaText(text), ElementUpdate::VideoUrl(url)) => text.video_url = url,

        (_, update) => {
            return Err(EditorError::NotApplicable {
                update: update.name(),
                kind: kind_name,
            });
        }
    }
    Ok(())
}

/// Parse the amount typed into the editor's price field.
///
/// Reads the leading decimal number (`"12.5 USD"` reads as 12.5) and converts
/// it to the smallest unit, rounding to whole cents. Returns `None` for input
/// that does not start with a number.
pub fn parse_display_amount(input: &str) -> Option<i64> {
    let value = leading_number(input)?;
    let cents = (value * 100.0).round();
    if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(cents as i64)
}

fn leading_number(input: &str) -> Option<f64> {
    let input = input.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in input.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    input[..end].parse().ok()
}

/// The stored amount as the editor shows it, e.g. `1000` as `"10.00"`.
pub fn display_amount(amount: i64) -> String {
    format_amount(amount)
}

/// Apply typed price input. Non-numeric input leaves the element unchanged.
///
/// Returns whether the amount was updated.
pub fn update_amount_from_input(
    definition: &mut SurveyDefinition,
    id: &ElementId,
    input: &str,
) -> Result<bool, EditorError> {
    let Some(amount) = parse_display_amount(input) else {
        tracing::debug!(element = %id, input, "ignoring non-numeric amount");
        return Ok(false);
    };
    apply_update(definition, id, ElementUpdate::Amount(amount))?;
    Ok(true)
}
