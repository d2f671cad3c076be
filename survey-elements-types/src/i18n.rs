//! Localized strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key under which the survey's default language is stored.
pub const DEFAULT_LANGUAGE: &str = "default";

/// A text field translated into several languages.
///
/// The survey's default language lives under [`DEFAULT_LANGUAGE`];
/// other languages under their language code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct I18nString {
    values: BTreeMap<String, String>,
}

impl I18nString {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// A string that only has a default-language text.
    pub fn from_default(text: impl Into<String>) -> Self {
        Self::new().with(DEFAULT_LANGUAGE, text)
    }

    /// Add or replace a translation.
    pub fn with(mut self, language_code: impl Into<String>, text: impl Into<String>) -> Self {
        self.set(language_code, text);
        self
    }

    pub fn set(&mut self, language_code: impl Into<String>, text: impl Into<String>) {
        self.values.insert(language_code.into(), text.into());
    }

    pub fn get(&self, language_code: &str) -> Option<&str> {
        self.values.get(language_code).map(String::as_str)
    }

    /// The default-language text, if any.
    pub fn default_text(&self) -> Option<&str> {
        self.get(DEFAULT_LANGUAGE)
    }

    /// True when the default-language text is missing or whitespace.
    pub fn is_blank(&self) -> bool {
        self.default_text().is_none_or(|text| text.trim().is_empty())
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Look up the text for a language.
///
/// Never fails: falls back to the default language, then to an empty string.
pub fn get_localized_value<'a>(field: &'a I18nString, language_code: &str) -> &'a str {
    field
        .get(language_code)
        .or_else(|| field.default_text())
        .unwrap_or("")
}

/// Create a string with the same text for every language code.
///
/// The result always carries a default-language entry.
pub fn create_i18n_string(text: &str, language_codes: &[String]) -> I18nString {
    let mut field = I18nString::from_default(text);
    for code in language_codes {
        field.set(code.as_str(), text);
    }
    field
}

/// A language a survey is offered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyLanguage {
    /// ISO language code, e.g. `"de"`.
    pub code: String,

    /// Whether this is the survey's default language.
    #[serde(default)]
    pub default: bool,

    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl SurveyLanguage {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            default: false,
            enabled: true,
        }
    }

    pub fn default_language(code: impl Into<String>) -> Self {
        Self {
            default: true,
            ..Self::new(code)
        }
    }
}

/// The keys under which a survey stores its translations.
///
/// The default language maps to [`DEFAULT_LANGUAGE`]; a survey without
/// configured languages only has the default key.
pub fn extract_language_codes(languages: &[SurveyLanguage]) -> Vec<String> {
    if languages.is_empty() {
        return vec![DEFAULT_LANGUAGE.to_string()];
    }
    languages
        .iter()
        .map(|language| {
            if language.default {
                DEFAULT_LANGUAGE.to_string()
            } else {
                language.code.clone()
            }
        })
        .collect()
}
