//! Color schemes for chart output.
//!
//! A scheme is a small palette: background and foreground shades, the bar
//! colors (one per band, low ratings first) and the color of the value
//! labels drawn above each bar.

use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Name of the scheme used when none is selected
pub const DEFAULT_SCHEME: &str = "gruvbox";

/// A normal and a dimmer variant of one color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shades {
    pub normal: String,
    pub dimmer: String,
}

impl Shades {
    fn new(normal: &str, dimmer: &str) -> Self {
        Self {
            normal: normal.to_string(),
            dimmer: dimmer.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub background: Shades,
    pub foreground: Shades,
    pub bar: Vec<String>,
    pub bar_value: String,
}

impl ColorScheme {
    /// Bar color for a band index; indexes past the palette reuse its last color
    pub fn bar_color(&self, band: usize) -> &str {
        self.bar
            .get(band)
            .or_else(|| self.bar.last())
            .map(String::as_str)
            .unwrap_or(self.foreground.normal.as_str())
    }

    pub fn gruvbox() -> Self {
        Self {
            background: Shades::new("#282828", "#1d2021"),
            foreground: Shades::new("#ebdbb2", "#a89984"),
            bar: vec!["#cc241d".into(), "#d79921".into(), "#98971a".into()],
            bar_value: "#fbf1c7".to_string(),
        }
    }

    pub fn nord() -> Self {
        Self {
            background: Shades::new("#2e3440", "#242933"),
            foreground: Shades::new("#eceff4", "#d8dee9"),
            bar: vec!["#bf616a".into(), "#ebcb8b".into(), "#a3be8c".into()],
            bar_value: "#e5e9f0".to_string(),
        }
    }

    pub fn solarized() -> Self {
        Self {
            background: Shades::new("#002b36", "#073642"),
            foreground: Shades::new("#839496", "#586e75"),
            bar: vec!["#dc322f".into(), "#b58900".into(), "#859900".into()],
            bar_value: "#93a1a1".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::gruvbox()
    }
}

/// Named color schemes, looked up case-insensitively
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorSchemes {
    schemes: BTreeMap<String, ColorScheme>,
}

impl ColorSchemes {
    /// The schemes that ship with the tool
    pub fn builtin() -> Self {
        let schemes = [
            ("gruvbox", ColorScheme::gruvbox()),
            ("nord", ColorScheme::nord()),
            ("solarized", ColorScheme::solarized()),
        ]
        .into_iter()
        .map(|(name, scheme)| (name.to_string(), scheme))
        .collect();
        Self { schemes }
    }

    /// Load a `{"name": {scheme}, ...}` JSON file.
    ///
    /// Loaded schemes are added to the built-in ones and win on name clashes.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let loaded: ColorSchemes = serde_json::from_str(&content)?;

        let mut schemes = Self::builtin();
        for (name, scheme) in loaded.schemes {
            schemes.schemes.insert(name.to_lowercase(), scheme);
        }
        tracing::debug!(
            "Loaded color schemes from {} ({} available)",
            path.display(),
            schemes.schemes.len()
        );
        Ok(schemes)
    }

    pub fn names(&self) -> Vec<&str> {
        self.schemes.keys().map(String::as_str).collect()
    }

    pub fn get(&self, name: &str) -> Result<&ColorScheme> {
        self.schemes
            .get(&name.to_lowercase())
            .ok_or_else(|| ReportError::UnsupportedScheme {
                scheme: name.to_string(),
                available: self.names().join(", "),
            })
    }
}

impl Default for ColorSchemes {
    fn default() -> Self {
        Self::builtin()
    }
}
