//! Presentation settings threaded into every reporter.

use crate::i18n::Localizer;
use crate::scheme::ColorScheme;
use crate::style::Styler;

/// Language, styling and palette for one report run.
///
/// Built once from the user's options and passed by reference; reporters
/// never consult process-wide state.
#[derive(Debug, Clone, Default)]
pub struct ReportContext {
    pub localizer: Localizer,
    pub styler: Styler,
    pub scheme: ColorScheme,
}

impl ReportContext {
    pub fn new(localizer: Localizer, styler: Styler, scheme: ColorScheme) -> Self {
        Self {
            localizer,
            styler,
            scheme,
        }
    }

    /// English labels, no escape codes, default palette
    pub fn plain() -> Self {
        Self::new(Localizer::english(), Styler::plain(), ColorScheme::default())
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.localizer.translate(key)
    }
}
