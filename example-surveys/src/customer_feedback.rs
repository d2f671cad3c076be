use survey_elements_types::{
    Element, ElementKind, I18nString, MediaTextElement, OpinionScaleElement, ShortTextElement,
    SurveyDefinition, SurveyLanguage, VisualStyle,
};

pub const SATISFACTION: &str = "satisfaction";
pub const COMMENT: &str = "comment";
pub const SCREENSHOT: &str = "screenshot";

/// Bilingual feedback survey: a color coded smiley scale, an optional comment
/// and a media element asking about a screenshot.
pub fn customer_feedback() -> SurveyDefinition {
    let satisfaction = Element::new(
        SATISFACTION,
        I18nString::from_default("How satisfied are you with our service?")
            .with("de", "Wie zufrieden sind Sie mit unserem Service?"),
        ElementKind::OpinionScale(
            OpinionScaleElement::new(
                5,
                I18nString::from_default("Not at all").with("de", "Gar nicht"),
                I18nString::from_default("Very").with("de", "Sehr"),
            )
            .with_visual_style(VisualStyle::Smiley)
            .with_color_coding(true),
        ),
    )
    .required();

    let comment = Element::new(
        COMMENT,
        I18nString::from_default("Anything else you want to tell us?")
            .with("de", "Möchten Sie uns noch etwas mitteilen?"),
        ElementKind::ShortText(ShortTextElement {
            placeholder: Some(
                I18nString::from_default("Type your answer here...")
                    .with("de", "Ihre Antwort..."),
            ),
        }),
    )
    .with_subheader(I18nString::from_default("Optional").with("de", "Optional"));

    let screenshot = Element::new(
        SCREENSHOT,
        I18nString::from_default("What do you see in this screenshot?")
            .with("de", "Was sehen Sie auf diesem Screenshot?"),
        ElementKind::MediaText(MediaTextElement {
            placeholder: None,
            image_url: Some("https://example.com/screenshot.png".to_string()),
            video_url: None,
        }),
    );

    SurveyDefinition::new(vec![satisfaction, comment, screenshot]).with_languages(vec![
        SurveyLanguage::default_language("en"),
        SurveyLanguage::new("de"),
    ])
}

/// A short recommendation poll as stored by the editor.
pub const FEEDBACK_JSON: &str = r#"{
  "languages": [{ "code": "en", "default": true }],
  "elements": [
    {
      "id": "nps",
      "type": "opinionScale",
      "headline": { "default": "How likely are you to recommend us?" },
      "required": true,
      "scaleRange": 10,
      "lowerLabel": { "default": "Not likely" },
      "upperLabel": { "default": "Very likely" },
      "isColorCodingEnabled": true
    },
    {
      "id": "reason",
      "type": "shortText",
      "headline": { "default": "What is the main reason for your score?" },
      "placeholder": { "default": "Type your answer here..." }
    }
  ]
}"#;
