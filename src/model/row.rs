//! The canonical report row.

use super::Severity;
use serde::{Deserialize, Serialize};

/// One style mismatch, normalized for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Where the discrepancy is (e.g., "Line 12", "Title slide 1")
    pub element: String,

    /// Category of discrepancy (e.g., "font", "margins")
    #[serde(rename = "type")]
    pub kind: String,

    /// Expected value
    pub expected: String,

    /// Observed value
    pub found: String,

    /// Page number (1-based)
    pub page: u32,

    /// Severity level
    pub severity: Severity,

    /// Source text, only for rows derived from font-check output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ReportRow {
    /// Create a row without source text.
    pub fn new(
        element: impl Into<String>,
        kind: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
        page: u32,
        severity: Severity,
    ) -> Self {
        Self {
            element: element.into(),
            kind: kind.into(),
            expected: expected.into(),
            found: found.into(),
            page,
            severity,
            text: None,
        }
    }

    /// Attach the source text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Cell values in table column order.
    pub fn cells(&self) -> [String; 6] {
        [
            self.element.clone(),
            self.kind.clone(),
            self.expected.clone(),
            self.found.clone(),
            self.page.to_string(),
            self.severity.as_str().to_string(),
        ]
    }
}
