use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    DefinitionError, Element, ElementId, ElementKind, SurveyLanguage, extract_language_codes,
};

/// The ordered elements of a survey and the languages it is offered in.
///
/// Read-only configuration for everything that renders or times elements;
/// only the editor mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDefinition {
    #[serde(default)]
    pub languages: Vec<SurveyLanguage>,

    pub elements: Vec<Element>,
}

impl SurveyDefinition {
    /// Create a new definition with the given elements.
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            languages: Vec::new(),
            elements,
        }
    }

    /// Set the languages.
    pub fn with_languages(mut self, languages: Vec<SurveyLanguage>) -> Self {
        self.languages = languages;
        self
    }

    /// Parse and check a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let definition: Self = serde_json::from_str(json)?;
        definition.check()?;
        Ok(definition)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, DefinitionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject duplicate element ids and scales with fewer than two options.
    pub fn check(&self) -> Result<(), DefinitionError> {
        let mut seen = HashSet::new();
        for element in &self.elements {
            if element.id.is_empty() {
                return Err(DefinitionError::EmptyElementId);
            }
            if !seen.insert(&element.id) {
                return Err(DefinitionError::DuplicateElement(element.id.clone()));
            }
            if let ElementKind::OpinionScale(scale) = &element.kind
                && scale.scale_range < 2
            {
                return Err(DefinitionError::InvalidScaleRange {
                    element: element.id.clone(),
                    scale_range: scale.scale_range,
                });
            }
        }
        Ok(())
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| &element.id == id)
    }

    pub fn element_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|element| &element.id == id)
    }

    /// Position of an element in survey order.
    pub fn position(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|element| &element.id == id)
    }

    /// Translation keys of this survey (see [`extract_language_codes`]).
    pub fn language_codes(&self) -> Vec<String> {
        extract_language_codes(&self.languages)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}
