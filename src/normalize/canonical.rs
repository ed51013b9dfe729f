//! Adapter for records that are already in report-row shape.
//!
//! Accepts the English keys of [`ReportRow`] as well as the Dutch keys of
//! older mismatch files (`verwacht`, `gevonden`, `pagina`, `ernst`).

use super::fields::{optional_str, required_str_any, required_u32_any};
use crate::error::{Error, Result};
use crate::model::{ReportRow, Severity};
use serde_json::Value;

const ELEMENT: &[&str] = &["element"];
const KIND: &[&str] = &["type", "kind"];
const EXPECTED: &[&str] = &["expected", "verwacht"];
const FOUND: &[&str] = &["found", "gevonden"];
const PAGE: &[&str] = &["page", "pagina"];
const SEVERITY: &[&str] = &["severity", "ernst"];

/// Validate one canonical record and convert it into a report row.
pub(super) fn normalize_record(index: usize, record: &Value) -> Result<ReportRow> {
    if !record.is_object() {
        return Err(Error::malformed(index, "<record>", "must be a JSON object"));
    }

    let element = required_str_any(index, record, ELEMENT)?;
    let kind = required_str_any(index, record, KIND)?;
    let expected = required_str_any(index, record, EXPECTED)?;
    let found = required_str_any(index, record, FOUND)?;

    let page = required_u32_any(index, record, PAGE)?;
    if page == 0 {
        return Err(Error::malformed(index, "page", "must be at least 1"));
    }

    let severity: Severity = required_str_any(index, record, SEVERITY)?
        .parse()
        .map_err(|e: Error| Error::malformed(index, "severity", e.to_string()))?;

    let mut row = ReportRow::new(element, kind, expected, found, page, severity);
    if let Some(text) = optional_str(index, record, "text")? {
        row = row.with_text(text);
    }
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_english_record() {
        let record = json!({
            "element": "Paragraph 3",
            "type": "margins",
            "expected": "2 cm",
            "found": "1.5 cm",
            "page": 3,
            "severity": "medium"
        });
        let row = normalize_record(0, &record).unwrap();
        assert_eq!(
            row,
            ReportRow::new("Paragraph 3", "margins", "2 cm", "1.5 cm", 3, Severity::Medium)
        );
    }

    #[test]
    fn test_dutch_record() {
        let record = json!({
            "element": "Titel dia 1",
            "type": "kleur",
            "verwacht": "#000000",
            "gevonden": "#111111",
            "pagina": 1,
            "ernst": "hoog"
        });
        let row = normalize_record(0, &record).unwrap();
        assert_eq!(row.expected, "#000000");
        assert_eq!(row.found, "#111111");
        assert_eq!(row.severity, Severity::High);
    }

    #[test]
    fn test_page_zero_rejected() {
        let record = json!({
            "element": "x", "type": "y", "expected": "a", "found": "b",
            "page": 0, "severity": "low"
        });
        let err = normalize_record(1, &record).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { index: 1, ref field, .. } if field == "page"));
    }

    #[test]
    fn test_unknown_severity_rejected() {
        let record = json!({
            "element": "x", "type": "y", "expected": "a", "found": "b",
            "page": 2, "severity": "critical"
        });
        let err = normalize_record(0, &record).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { ref field, .. } if field == "severity"));
    }

    #[test]
    fn test_missing_found_rejected() {
        let record = json!({
            "element": "x", "type": "y", "expected": "a", "page": 2, "severity": "low"
        });
        let err = normalize_record(0, &record).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { ref field, .. } if field == "found"));
    }

    #[test]
    fn test_text_passes_through() {
        let record = json!({
            "element": "Line 2", "type": "font", "expected": "Montserrat", "found": "Arial",
            "page": 1, "severity": "low", "text": "Hello"
        });
        let row = normalize_record(0, &record).unwrap();
        assert_eq!(row.text.as_deref(), Some("Hello"));
    }
}
