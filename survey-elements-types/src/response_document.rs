use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ElementId, ResponsePatch, ResponseValue};

/// Error type for response access operations.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Missing response for element: {0}")]
    MissingElement(ElementId),

    #[error("Type mismatch at element '{element}': expected {expected}, got {actual}")]
    TypeMismatch {
        element: ElementId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// The aggregate answer set of a survey session, keyed by element id.
///
/// Only ever grows through `merge`, which is a shallow merge where the
/// patch key wins. An element may overwrite its own earlier answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseDocument {
    values: BTreeMap<ElementId, ResponseValue>,
}

impl ResponseDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Insert a response value for the given element.
    pub fn insert(&mut self, element: impl Into<ElementId>, value: impl Into<ResponseValue>) {
        self.values.insert(element.into(), value.into());
    }

    /// Merge a single-element patch into this document.
    ///
    /// Returns the value previously stored for that element, if any.
    pub fn merge(&mut self, patch: ResponsePatch) -> Option<ResponseValue> {
        let (element, value) = patch.into_parts();
        self.values.insert(element, value)
    }

    /// Consume the document and return it with the patch merged in.
    pub fn merged(mut self, patch: ResponsePatch) -> Self {
        self.merge(patch);
        self
    }

    /// Get the response value of an element.
    pub fn get(&self, element: &ElementId) -> Option<&ResponseValue> {
        self.values.get(element)
    }

    /// Check if an element has a response.
    pub fn contains(&self, element: &ElementId) -> bool {
        self.values.contains_key(element)
    }

    /// Remove the response of an element.
    pub fn remove(&mut self, element: &ElementId) -> Option<ResponseValue> {
        self.values.remove(element)
    }

    /// Get an iterator over all element-value pairs, ordered by element id.
    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, &ResponseValue)> {
        self.values.iter()
    }

    /// Get the number of responses.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no responses.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another document into this one. Keys of `other` win.
    pub fn extend(&mut self, other: ResponseDocument) {
        self.values.extend(other.values);
    }

    // === Convenience accessors ===

    /// Get a string value for the given element.
    pub fn get_string(&self, element: &ElementId) -> Result<&str, ResponseError> {
        match self.get(element) {
            Some(ResponseValue::String(s)) => Ok(s),
            Some(other) => Err(ResponseError::TypeMismatch {
                element: element.clone(),
                expected: "String",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingElement(element.clone())),
        }
    }

    /// Get an integer value for the given element.
    pub fn get_int(&self, element: &ElementId) -> Result<i64, ResponseError> {
        match self.get(element) {
            Some(ResponseValue::Int(i)) => Ok(*i),
            Some(other) => Err(ResponseError::TypeMismatch {
                element: element.clone(),
                expected: "Int",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingElement(element.clone())),
        }
    }

    /// Get a float value for the given element.
    pub fn get_float(&self, element: &ElementId) -> Result<f64, ResponseError> {
        match self.get(element) {
            Some(ResponseValue::Float(f)) => Ok(*f),
            Some(other) => Err(ResponseError::TypeMismatch {
                element: element.clone(),
                expected: "Float",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingElement(element.clone())),
        }
    }

    /// Get a boolean value for the given element.
    pub fn get_bool(&self, element: &ElementId) -> Result<bool, ResponseError> {
        match self.get(element) {
            Some(ResponseValue::Bool(b)) => Ok(*b),
            Some(other) => Err(ResponseError::TypeMismatch {
                element: element.clone(),
                expected: "Bool",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingElement(element.clone())),
        }
    }

    /// Check if an element has a response that counts as an answer.
    ///
    /// Returns `false` if the response is missing or blank (an empty text
    /// input), which is what a required check needs.
    pub fn has_value(&self, element: &ElementId) -> bool {
        self.get(element).is_some_and(ResponseValue::is_answered)
    }
}

impl IntoIterator for ResponseDocument {
    type Item = (ElementId, ResponseValue);
    type IntoIter = std::collections::btree_map::IntoIter<ElementId, ResponseValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResponseDocument {
    type Item = (&'a ElementId, &'a ResponseValue);
    type IntoIter = std::collections::btree_map::Iter<'a, ElementId, ResponseValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_patch;

    #[test]
    fn insert_and_get() {
        let mut responses = ResponseDocument::new();
        responses.insert("name", "Alice");
        responses.insert("rating", ResponseValue::Int(4));

        assert_eq!(
            responses.get_string(&ElementId::new("name")).unwrap(),
            "Alice"
        );
        assert_eq!(responses.get_int(&ElementId::new("rating")).unwrap(), 4);
    }

    #[test]
    fn merge_overwrites_only_the_patched_key() {
        let mut responses = ResponseDocument::new();
        responses.insert("rating", 2);
        responses.insert("comment", "meh");

        let previous = responses.merge(build_patch("rating", 5));

        assert_eq!(previous, Some(ResponseValue::Int(2)));
        assert_eq!(responses.get_int(&ElementId::new("rating")).unwrap(), 5);
        assert_eq!(
            responses.get_string(&ElementId::new("comment")).unwrap(),
            "meh"
        );
        assert_eq!(responses.len(), 2);
    }

    #[test]
    fn type_mismatch_error() {
        let mut responses = ResponseDocument::new();
        responses.insert("rating", ResponseValue::Int(3));

        let result = responses.get_string(&ElementId::new("rating"));
        assert!(matches!(result, Err(ResponseError::TypeMismatch { .. })));

        let result = responses.get_int(&ElementId::new("missing"));
        assert!(matches!(result, Err(ResponseError::MissingElement(_))));
    }

    #[test]
    fn blank_text_has_no_value() {
        let mut responses = ResponseDocument::new();
        responses.insert("comment", "");
        assert!(responses.contains(&ElementId::new("comment")));
        assert!(!responses.has_value(&ElementId::new("comment")));
    }

    #[test]
    fn json_round_trip_keeps_plain_shape() {
        let mut responses = ResponseDocument::new();
        responses.insert("pay", "completed");
        responses.insert("rating", 4);

        let json = serde_json::to_string(&responses).unwrap();
        assert_eq!(json, r#"{"pay":"completed","rating":4}"#);
    }
}
