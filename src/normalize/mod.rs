//! Record normalization.
//!
//! Raw JSON records come in two shapes: font-check output and canonical
//! rows. Both pass through a single [`Normalizer`], which yields
//! [`ReportRow`]s in input order or fails on the first malformed record.
//!
//! # Example
//!
//! ```
//! use stylereport::detect::{parse_records, InputFormat};
//! use stylereport::normalize::{NormalizeOptions, Normalizer};
//!
//! let records = parse_records(
//!     r#"[{"line": 7, "text": "Intro", "reason": "Font is 'Arial' instead of 'Calibri'"}]"#,
//! )?;
//! let rows = Normalizer::new(NormalizeOptions::default()).normalize(&records, InputFormat::Auto)?;
//! assert_eq!(rows[0].found, "Arial");
//! assert_eq!(rows[0].expected, "Calibri");
//! # Ok::<(), stylereport::Error>(())
//! ```

mod canonical;
mod fields;
mod font;
mod options;

pub use font::parse_font_reason;
pub use options::NormalizeOptions;

use crate::detect::{detect_input_format, InputFormat};
use crate::error::Result;
use crate::model::ReportRow;
use serde_json::Value;

/// Converts raw records into report rows.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    /// Create a normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalize records of the given (or detected) format.
    pub fn normalize(&self, records: &[Value], format: InputFormat) -> Result<Vec<ReportRow>> {
        let format = match format {
            InputFormat::Auto => detect_input_format(records)?,
            other => other,
        };
        log::debug!("normalizing {} records as {:?}", records.len(), format);

        match format {
            InputFormat::Canonical => self.normalize_canonical(records),
            InputFormat::FontMismatch | InputFormat::Auto => self.normalize_font_mismatches(records),
        }
    }

    /// Normalize font-check records (`line`, `text`, `reason`).
    pub fn normalize_font_mismatches(&self, records: &[Value]) -> Result<Vec<ReportRow>> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| font::normalize_record(index, record, &self.options))
            .collect()
    }

    /// Validate records that are already in canonical shape.
    pub fn normalize_canonical(&self, records: &[Value]) -> Result<Vec<ReportRow>> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| canonical::normalize_record(index, record))
            .collect()
    }
}

/// Normalize records with default options, detecting their format.
pub fn normalize(records: &[Value]) -> Result<Vec<ReportRow>> {
    Normalizer::default().normalize(records, InputFormat::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_preserves_input_order() {
        let records = vec![
            json!({"line": 9, "text": "a", "reason": "Font is 'A' instead of 'B'"}),
            json!({"line": 2, "text": "b", "reason": "Font is 'C' instead of 'D'"}),
            json!({"line": 5, "text": "c", "reason": "odd"}),
        ];
        let rows = normalize(&records).unwrap();
        let elements: Vec<_> = rows.iter().map(|r| r.element.as_str()).collect();
        assert_eq!(elements, ["Line 9", "Line 2", "Line 5"]);
    }

    #[test]
    fn test_first_malformed_record_aborts() {
        let records = vec![
            json!({"line": 1, "text": "a", "reason": "r"}),
            json!({"line": 2, "reason": "r"}),
        ];
        let err = normalize(&records).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedInput { index: 1, ref field, .. } if field == "text"
        ));
    }

    #[test]
    fn test_explicit_format_skips_detection() {
        let records = vec![json!({"element": "Logo"})];
        let err = Normalizer::default()
            .normalize(&records, InputFormat::FontMismatch)
            .unwrap_err();
        assert!(matches!(err, Error::MalformedInput { ref field, .. } if field == "line"));
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(&[]).unwrap().is_empty());
    }
}
