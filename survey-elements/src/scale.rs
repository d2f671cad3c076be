//! Mapping of opinion-scale positions to smileys and color tiers.
//!
//! Whatever the scale range (5, 7 or 10 in practice), positions are spread
//! evenly over a fixed palette of ten buckets, so the lowest option is always
//! the most negative face and the highest the most positive one.

/// Number of buckets in the smiley palette.
pub const PALETTE_SIZE: u8 = 10;

/// Error type for positions that cannot be mapped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScaleError {
    /// A single-option scale has no spread to map.
    #[error("Scale range must be at least 2, got {0}")]
    RangeTooSmall(u32),

    #[error("Position {index} is outside the scale 1..={scale_range}")]
    IndexOutOfRange { index: u32, scale_range: u32 },
}

/// Relative position of `index` on the scale, from 0.0 (lowest) to 1.0 (highest).
pub fn scale_fraction(index: u32, scale_range: u32) -> Result<f64, ScaleError> {
    if scale_range < 2 {
        return Err(ScaleError::RangeTooSmall(scale_range));
    }
    if index < 1 || index > scale_range {
        return Err(ScaleError::IndexOutOfRange { index, scale_range });
    }
    Ok(f64::from(index - 1) / f64::from(scale_range - 1))
}

/// Palette bucket of `index`: `round(((index - 1) / (scale_range - 1)) * 9)`.
pub fn scale_bucket(index: u32, scale_range: u32) -> Result<u8, ScaleError> {
    let fraction = scale_fraction(index, scale_range)?;
    // fraction is in [0, 1], so the product is in [0, 9]
    Ok((fraction * f64::from(PALETTE_SIZE - 1)).round() as u8)
}

/// Sentiment tier used for color coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTier {
    Negative,
    Neutral,
    Positive,
}

impl ColorTier {
    /// Tier of a palette bucket: 7 and up positive, 4 and up neutral.
    pub fn for_bucket(bucket: u8) -> Self {
        if bucket >= 7 {
            Self::Positive
        } else if bucket >= 4 {
            Self::Neutral
        } else {
            Self::Negative
        }
    }

    /// Tier of a relative position: 0.7 and up positive, 0.4 and up neutral.
    pub fn for_fraction(fraction: f64) -> Self {
        if fraction >= 0.7 {
            Self::Positive
        } else if fraction >= 0.4 {
            Self::Neutral
        } else {
            Self::Negative
        }
    }
}

/// The ten faces of the smiley palette, most negative first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Smiley {
    Tired,
    Weary,
    Persevering,
    Frowning,
    Confused,
    Neutral,
    SlightlySmiling,
    SmilingWithSmilingEyes,
    GrinningSquinting,
    GrinningWithSmilingEyes,
}

impl Smiley {
    pub const PALETTE: [Smiley; PALETTE_SIZE as usize] = [
        Smiley::Tired,
        Smiley::Weary,
        Smiley::Persevering,
        Smiley::Frowning,
        Smiley::Confused,
        Smiley::Neutral,
        Smiley::SlightlySmiling,
        Smiley::SmilingWithSmilingEyes,
        Smiley::GrinningSquinting,
        Smiley::GrinningWithSmilingEyes,
    ];

    /// Face of a palette bucket. Buckets past the palette show the neutral face.
    pub fn from_bucket(bucket: u8) -> Self {
        Self::PALETTE
            .get(usize::from(bucket))
            .copied()
            .unwrap_or(Smiley::Neutral)
    }

    /// Face for a position on a scale.
    pub fn for_index(index: u32, scale_range: u32) -> Result<Self, ScaleError> {
        scale_bucket(index, scale_range).map(Self::from_bucket)
    }
}

/// How a smiley face is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmileyFill {
    /// Inactive, no color coding.
    None,
    /// Active, no color coding.
    Highlight,
    /// Active with color coding.
    Strong(ColorTier),
    /// Inactive with color coding.
    Light(ColorTier),
}

/// Fill of the smiley in `bucket`.
pub fn smiley_fill(bucket: u8, active: bool, color_coding: bool) -> SmileyFill {
    match (active, color_coding) {
        (true, true) => SmileyFill::Strong(ColorTier::for_bucket(bucket)),
        (true, false) => SmileyFill::Highlight,
        (false, true) => SmileyFill::Light(ColorTier::for_bucket(bucket)),
        (false, false) => SmileyFill::None,
    }
}

/// Background tier of a number button.
///
/// Only inactive buttons are tinted, and only with color coding enabled;
/// the selected button uses the brand color instead.
pub fn number_color(
    index: u32,
    scale_range: u32,
    active: bool,
    color_coding: bool,
) -> Result<Option<ColorTier>, ScaleError> {
    let fraction = scale_fraction(index, scale_range)?;
    if active || !color_coding {
        return Ok(None);
    }
    Ok(Some(ColorTier::for_fraction(fraction)))
}

/// Whether the star at `index` is filled for the selected `value`.
pub fn star_filled(index: u32, value: Option<u32>) -> bool {
    value.is_some_and(|value| index <= value)
}
