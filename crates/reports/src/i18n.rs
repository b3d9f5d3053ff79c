//! Localization of report labels.
//!
//! Labels are looked up by their English text. A key without a translation
//! is returned unchanged, so English needs no table at all.

use crate::error::{ReportError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Languages with a built-in translation table
pub const AVAILABLE_LANGUAGES: [&str; 2] = ["en", "pl"];

const POLISH: &[(&str, &str)] = &[
    ("SUMMARY", "PODSUMOWANIE"),
    ("Found", "Znaleziono"),
    ("Average rating", "Średnia ocena"),
    ("IMDB Ratings", "Oceny IMDB"),
    ("Rating", "Ocena"),
    ("Rating count", "Liczba udzielonych ocen"),
    ("Top rated", "Najwyżej ocenione"),
    ("Average ratings across years", "Średnie oceny na przestrzeni lat"),
    ("All entries have been filtered out", "Wszystkie wpisy zostały odfiltrowane"),
    ("Saved chart series to", "Zapisano dane wykresu do"),
];

/// Shape of a translation file on disk (the `source` key is ignored)
#[derive(Debug, Deserialize)]
struct TranslationFile {
    target: String,
    messages: HashMap<String, String>,
}

/// Translates report labels into the selected language
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    language: String,
    messages: HashMap<String, String>,
}

impl Localizer {
    /// Localizer for a built-in language code (case-insensitive)
    pub fn new(language: &str) -> Result<Self> {
        let language = language.to_lowercase();
        let table: &[(&str, &str)] = match language.as_str() {
            "en" => &[],
            "pl" => POLISH,
            _ => {
                return Err(ReportError::UnsupportedLanguage {
                    language: language.clone(),
                    available: AVAILABLE_LANGUAGES.join(", "),
                });
            }
        };

        Ok(Self {
            messages: table
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            language,
        })
    }

    /// English, which returns every key unchanged
    pub fn english() -> Self {
        Self {
            language: "en".to_string(),
            messages: HashMap::new(),
        }
    }

    /// Load a translation file of the form
    /// `{"source": "en", "target": "de", "messages": {"Found": "Gefunden"}}`
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: TranslationFile = serde_json::from_str(&content)?;
        tracing::debug!(
            "Loaded {} translations for '{}' from {}",
            file.messages.len(),
            file.target,
            path.display()
        );

        Ok(Self {
            language: file.target.to_lowercase(),
            messages: file.messages,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Localized text for `key`, or `key` itself when there is no translation
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages.get(key).map(String::as_str).unwrap_or(key)
    }
}
