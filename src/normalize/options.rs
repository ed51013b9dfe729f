//! Normalization options and configuration.

use crate::model::Severity;

/// Defaults applied while turning raw records into report rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Expected font when the reason names none
    pub default_font: String,

    /// Found font when the reason cannot be parsed
    pub unknown_font: String,

    /// Prefix of the synthesized element label ("Line " + line number)
    pub element_prefix: String,

    /// Category assigned to font-check rows
    pub font_kind: String,

    /// Page assigned to font-check rows (lines are not mapped to pages)
    pub default_page: u32,

    /// Severity assigned to font-check rows
    pub default_severity: Severity,
}

impl NormalizeOptions {
    /// Create new normalize options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default expected font.
    pub fn with_default_font(mut self, font: impl Into<String>) -> Self {
        self.default_font = font.into();
        self
    }

    /// Set the sentinel used when the found font is unknown.
    pub fn with_unknown_font(mut self, label: impl Into<String>) -> Self {
        self.unknown_font = label.into();
        self
    }

    /// Set the element label prefix.
    pub fn with_element_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.element_prefix = prefix.into();
        self
    }

    /// Set the category of font-check rows.
    pub fn with_font_kind(mut self, kind: impl Into<String>) -> Self {
        self.font_kind = kind.into();
        self
    }

    /// Set the page of font-check rows. Clamped to at least 1.
    pub fn with_default_page(mut self, page: u32) -> Self {
        self.default_page = page.max(1);
        self
    }

    /// Set the severity of font-check rows.
    pub fn with_default_severity(mut self, severity: Severity) -> Self {
        self.default_severity = severity;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            default_font: "Montserrat".to_string(),
            unknown_font: "Unknown".to_string(),
            element_prefix: "Line ".to_string(),
            font_kind: "font".to_string(),
            default_page: 1,
            default_severity: Severity::Low,
        }
    }
}
