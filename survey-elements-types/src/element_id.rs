use std::fmt;

use serde::{Deserialize, Serialize};

/// The identifier of a survey element, e.g. `"satisfaction"`.
///
/// Used as the key of both the `ResponseDocument` and the `TtcMap`.
/// Each element owns exactly one key; nothing in this crate ever reads
/// another element's entry through its id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId {
    id: String,
}

impl ElementId {
    /// Create a new element id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Check if the id is empty.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl AsRef<str> for ElementId {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for ElementId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&ElementId> for ElementId {
    fn from(id: &ElementId) -> Self {
        id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let id = ElementId::new("satisfaction");
        assert_eq!(id.as_str(), "satisfaction");
        assert!(!id.is_empty());
    }

    #[test]
    fn display() {
        let id = ElementId::new("pay");
        assert_eq!(format!("{}", id), "pay");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ElementId::new("q1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"q1\"");

        let back: ElementId = serde_json::from_str("\"q1\"").unwrap();
        assert_eq!(back, id);
    }
}
