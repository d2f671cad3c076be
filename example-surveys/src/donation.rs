use survey_elements_types::{
    Element, ElementKind, I18nString, OpinionScaleElement, PaymentElement, StripeIntegration,
    SurveyDefinition, VisualStyle,
};

pub const EXPERIENCE: &str = "experience";
pub const DONATION: &str = "donation";

/// Star rating followed by an optional $25.00 donation.
pub fn donation() -> SurveyDefinition {
    let experience = Element::new(
        EXPERIENCE,
        I18nString::from_default("How did you like the event?"),
        ElementKind::OpinionScale(
            OpinionScaleElement::new(
                5,
                I18nString::from_default("Poor"),
                I18nString::from_default("Excellent"),
            )
            .with_visual_style(VisualStyle::Star),
        ),
    )
    .required();

    let mut payment = PaymentElement::new("usd", 2500)
        .with_button_label(I18nString::from_default("Donate"));
    payment.stripe_integration = Some(StripeIntegration {
        public_key: Some("pk_test_example".to_string()),
        price_id: Some("price_example".to_string()),
    });

    let donation = Element::new(
        DONATION,
        I18nString::from_default("Support the next event"),
        ElementKind::Payment(payment),
    )
    .with_subheader(I18nString::from_default("Every donation helps."));

    SurveyDefinition::new(vec![experience, donation])
}
