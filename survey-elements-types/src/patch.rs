use serde::Serialize;
use serde::ser::SerializeMap;

use crate::{ElementId, ResponseValue};

/// The minimal partial update produced when one element's value changes.
///
/// Serializes as a single-key object, `{"<element id>": <value>}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsePatch {
    element: ElementId,
    value: ResponseValue,
}

impl ResponsePatch {
    /// The element this patch writes to.
    pub fn element(&self) -> &ElementId {
        &self.element
    }

    /// The new value.
    pub fn value(&self) -> &ResponseValue {
        &self.value
    }

    pub fn into_parts(self) -> (ElementId, ResponseValue) {
        (self.element, self.value)
    }
}

impl Serialize for ResponsePatch {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.element, &self.value)?;
        map.end()
    }
}

/// Build the patch for one element's new value.
///
/// Reads nothing but its arguments. The caller merges the result into the
/// `ResponseDocument`.
pub fn build_patch(element: impl Into<ElementId>, value: impl Into<ResponseValue>) -> ResponsePatch {
    ResponsePatch {
        element: element.into(),
        value: value.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_key_object() {
        let patch = build_patch("satisfaction", 4);
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"satisfaction":4}"#
        );
    }

    #[test]
    fn parts() {
        let patch = build_patch("pay", "completed");
        assert_eq!(patch.element().as_str(), "pay");
        assert_eq!(patch.value().as_str(), Some("completed"));

        let (element, value) = patch.into_parts();
        assert_eq!(element, ElementId::new("pay"));
        assert_eq!(value, ResponseValue::from("completed"));
    }
}
