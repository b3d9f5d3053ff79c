//! Terminal styling for report text.

use colored::Colorize;
use std::io::IsTerminal;

/// Wraps text in terminal styles when enabled, otherwise leaves it alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    /// Styling that never adds escape codes
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn styled() -> Self {
        Self { enabled: true }
    }

    /// Enable styling only when both stdout and stderr are terminals
    pub fn detect() -> Self {
        Self {
            enabled: std::io::stdout().is_terminal() && std::io::stderr().is_terminal(),
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn underline(&self, text: &str) -> String {
        if self.enabled {
            text.underline().to_string()
        } else {
            text.to_string()
        }
    }
}
