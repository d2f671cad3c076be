use serde::{Deserialize, Serialize};

/// A single answer stored in the `ResponseDocument`.
///
/// Serialized untagged, so a document reads like plain JSON:
/// `{"satisfaction": 4, "pay": "completed"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    /// A boolean value.
    Bool(bool),

    /// An integer value (opinion scale selections).
    Int(i64),

    /// A floating-point value.
    Float(f64),

    /// A string value (text inputs, payment status).
    String(String),

    /// A list of strings (structured answers).
    StringList(Vec<String>),
}

impl ResponseValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a float. Integers widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a string list.
    pub fn as_string_list(&self) -> Option<&[String]> {
        match self {
            Self::StringList(list) => Some(list),
            _ => None,
        }
    }

    /// Whether the value counts as an answer.
    ///
    /// Empty strings and empty lists are what an untouched text input or
    /// multi-value control emits, so they do not count.
    pub fn is_answered(&self) -> bool {
        match self {
            Self::String(s) => !s.trim().is_empty(),
            Self::StringList(list) => !list.is_empty(),
            _ => true,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::StringList(_) => "StringList",
        }
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for ResponseValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for ResponseValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for ResponseValue {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for ResponseValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for ResponseValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for ResponseValue {
    fn from(list: Vec<String>) -> Self {
        Self::StringList(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_json_shapes() {
        let value: ResponseValue = serde_json::from_str("4").unwrap();
        assert_eq!(value, ResponseValue::Int(4));

        let value: ResponseValue = serde_json::from_str("4.5").unwrap();
        assert_eq!(value, ResponseValue::Float(4.5));

        let value: ResponseValue = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(value.as_str(), Some("completed"));

        let value: ResponseValue = serde_json::from_str("[\"a\",\"b\"]").unwrap();
        assert_eq!(value.as_string_list().map(<[String]>::len), Some(2));
    }

    #[test]
    fn blank_strings_are_not_answers() {
        assert!(!ResponseValue::from("   ").is_answered());
        assert!(!ResponseValue::StringList(Vec::new()).is_answered());
        assert!(ResponseValue::Int(0).is_answered());
        assert!(ResponseValue::from("hi").is_answered());
    }
}
