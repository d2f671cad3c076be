//! Opinion scale element.

use survey_elements_types::{OpinionScaleElement, ResponseValue, VisualStyle};

use crate::scale::{
    ColorTier, ScaleError, Smiley, SmileyFill, number_color, scale_bucket, smiley_fill,
    star_filled,
};
use crate::view::ElementProps;

/// What one scale option shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleFace {
    /// The option's number, optionally tinted.
    Number { color: Option<ColorTier> },
    Smiley { smiley: Smiley, fill: SmileyFill },
    Star { filled: bool },
}

/// One clickable option of the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleButton {
    /// The value this option emits, from 1 to the scale range.
    pub value: u32,
    /// Whether this option is the current answer.
    pub active: bool,
    pub face: ScaleFace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpinionScaleView {
    pub visual_style: VisualStyle,
    pub buttons: Vec<ScaleButton>,
    pub lower_label: String,
    pub upper_label: String,
}

/// The selected option, if the current value is a position on the scale.
fn selected(config: &OpinionScaleElement, value: Option<&ResponseValue>) -> Option<u32> {
    value
        .and_then(ResponseValue::as_int)
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| (1..=config.scale_range).contains(v))
}

pub(crate) fn build_view(
    config: &OpinionScaleElement,
    props: &ElementProps,
) -> Result<OpinionScaleView, ScaleError> {
    let range = config.scale_range;
    if range < 2 {
        return Err(ScaleError::RangeTooSmall(range));
    }
    let current = selected(config, props.value.as_ref());
    let coding = config.is_color_coding_enabled;

    let buttons = (1..=range)
        .map(|value| {
            let active = current == Some(value);
            let face = match config.visual_style {
                VisualStyle::Number => ScaleFace::Number {
                    color: number_color(value, range, active, coding)?,
                },
                VisualStyle::Smiley => {
                    let bucket = scale_bucket(value, range)?;
                    ScaleFace::Smiley {
                        smiley: Smiley::from_bucket(bucket),
                        fill: smiley_fill(bucket, active, coding),
                    }
                }
                VisualStyle::Star => ScaleFace::Star {
                    filled: star_filled(value, current),
                },
            };
            Ok(ScaleButton {
                value,
                active,
                face,
            })
        })
        .collect::<Result<Vec<_>, ScaleError>>()?;

    Ok(OpinionScaleView {
        visual_style: config.visual_style,
        buttons,
        lower_label: props.localize(&config.lower_label),
        upper_label: props.localize(&config.upper_label),
    })
}

pub(crate) fn handle_select(
    config: &OpinionScaleElement,
    props: &ElementProps,
    option: u32,
) -> Option<ResponseValue> {
    if props.disabled {
        return None;
    }
    if (1..=config.scale_range).contains(&option) {
        Some(ResponseValue::from(option))
    } else {
        tracing::debug!(option, scale_range = config.scale_range, "option outside the scale");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_elements_types::I18nString;

    fn config(range: u32, style: VisualStyle, coding: bool) -> OpinionScaleElement {
        OpinionScaleElement::new(
            range,
            I18nString::from_default("Bad"),
            I18nString::from_default("Great"),
        )
        .with_visual_style(style)
        .with_color_coding(coding)
    }

    #[test]
    fn one_button_per_option() {
        let view = build_view(
            &config(7, VisualStyle::Number, false),
            &ElementProps::new("default"),
        )
        .unwrap();
        assert_eq!(view.buttons.len(), 7);
        assert_eq!(view.buttons[0].value, 1);
        assert_eq!(view.buttons[6].value, 7);
        assert_eq!(view.lower_label, "Bad");
        assert_eq!(view.upper_label, "Great");
        assert!(view.buttons.iter().all(|b| !b.active));
    }

    #[test]
    fn smileys_with_color_coding() {
        let props = ElementProps::new("default").with_value(5);
        let view = build_view(&config(5, VisualStyle::Smiley, true), &props).unwrap();

        assert_eq!(
            view.buttons[0].face,
            ScaleFace::Smiley {
                smiley: Smiley::Tired,
                fill: SmileyFill::Light(ColorTier::Negative),
            }
        );
        assert!(view.buttons[4].active);
        assert_eq!(
            view.buttons[4].face,
            ScaleFace::Smiley {
                smiley: Smiley::GrinningWithSmilingEyes,
                fill: SmileyFill::Strong(ColorTier::Positive),
            }
        );
    }

    #[test]
    fn stars_fill_up_to_selection() {
        let props = ElementProps::new("default").with_value(3);
        let view = build_view(&config(5, VisualStyle::Star, false), &props).unwrap();
        let filled: Vec<bool> = view
            .buttons
            .iter()
            .map(|b| matches!(b.face, ScaleFace::Star { filled: true }))
            .collect();
        assert_eq!(filled, vec![true, true, true, false, false]);
    }

    #[test]
    fn selected_number_is_not_tinted() {
        let props = ElementProps::new("default").with_value(10);
        let view = build_view(&config(10, VisualStyle::Number, true), &props).unwrap();
        assert_eq!(view.buttons[9].face, ScaleFace::Number { color: None });
        assert_eq!(
            view.buttons[8].face,
            ScaleFace::Number {
                color: Some(ColorTier::Positive)
            }
        );
    }

    #[test]
    fn foreign_values_select_nothing() {
        let props = ElementProps::new("default").with_value("five");
        let view = build_view(&config(5, VisualStyle::Number, false), &props).unwrap();
        assert!(view.buttons.iter().all(|b| !b.active));
    }

    #[test]
    fn single_option_scale_is_rejected() {
        let result = build_view(
            &config(1, VisualStyle::Star, false),
            &ElementProps::new("default"),
        );
        assert_eq!(result, Err(ScaleError::RangeTooSmall(1)));
    }

    #[test]
    fn select_emits_the_option() {
        let config = config(5, VisualStyle::Number, false);
        let props = ElementProps::new("default");
        assert_eq!(handle_select(&config, &props, 4), Some(ResponseValue::Int(4)));
        assert_eq!(handle_select(&config, &props, 0), None);
        assert_eq!(handle_select(&config, &props, 6), None);
    }

    #[test]
    fn disabled_scale_emits_nothing() {
        let config = config(5, VisualStyle::Star, false);
        let mut props = ElementProps::new("default");
        props.disabled = true;
        assert_eq!(handle_select(&config, &props, 4), None);
    }
}
