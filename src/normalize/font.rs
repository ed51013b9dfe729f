//! Adapter for font-check output (`line`, `text`, `reason`).

use super::fields::{required_line, required_str};
use super::NormalizeOptions;
use crate::error::Result;
use crate::model::ReportRow;
use serde_json::Value;

const MARKER: &str = "instead of";
const SEPARATOR: &str = " instead of ";
const WRAPPER: &str = "Font is '";

/// Extract `(found, expected)` from a free-text font mismatch reason.
///
/// `"Font is 'Arial' instead of 'Calibri'"` yields `("Arial", "Calibri")`.
/// A reason without `"instead of"` yields the unknown sentinel and the
/// default font.
pub fn parse_font_reason(reason: &str, options: &NormalizeOptions) -> (String, String) {
    if !reason.contains(MARKER) {
        return (options.unknown_font.clone(), options.default_font.clone());
    }

    let cleaned = reason.replace(WRAPPER, "").replace('\'', "");
    let mut parts = cleaned.split(SEPARATOR);

    let found = parts.next().unwrap_or_default().trim().to_string();
    let expected = parts
        .next()
        .map(|part| part.trim().to_string())
        .unwrap_or_else(|| options.default_font.clone());

    (found, expected)
}

/// Convert one font-check record into a report row.
pub(super) fn normalize_record(
    index: usize,
    record: &Value,
    options: &NormalizeOptions,
) -> Result<ReportRow> {
    let line = required_line(index, record, "line")?;
    let text = required_str(index, record, "text")?;
    let reason = required_str(index, record, "reason")?;

    let (found, expected) = parse_font_reason(reason, options);

    Ok(ReportRow {
        element: format!("{}{}", options.element_prefix, line),
        kind: options.font_kind.clone(),
        expected,
        found,
        page: options.default_page,
        severity: options.default_severity,
        text: Some(text.to_string()),
    })
}
