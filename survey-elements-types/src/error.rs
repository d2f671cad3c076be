use crate::ElementId;

/// Error type for loading a survey definition.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// The JSON did not match the definition schema.
    #[error("Invalid survey definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Element id must not be empty")]
    EmptyElementId,

    /// Two elements share an id, so their responses would collide.
    #[error("Duplicate element id: {0}")]
    DuplicateElement(ElementId),

    #[error("Opinion scale '{element}' needs at least 2 options, got {scale_range}")]
    InvalidScaleRange {
        element: ElementId,
        scale_range: u32,
    },
}

impl DefinitionError {
    /// The element the error is about, if any.
    pub fn element(&self) -> Option<&ElementId> {
        match self {
            Self::DuplicateElement(element) | Self::InvalidScaleRange { element, .. } => {
                Some(element)
            }
            Self::Json(_) | Self::EmptyElementId => None,
        }
    }
}
