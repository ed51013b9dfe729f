//! Input loading and format detection.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Shape of the records in a JSON input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Decide from the first record
    #[default]
    Auto,
    /// Font-check output: `line`, `text`, `reason`
    FontMismatch,
    /// Already-canonical rows: `element`, `type`, `expected`, `found`, `page`, `severity`
    Canonical,
}

/// Read a JSON array of records from a file.
///
/// # Example
/// ```no_run
/// use stylereport::detect::load_records;
///
/// let records = load_records("font_mismatches.json").unwrap();
/// println!("{} records", records.len());
/// ```
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}

/// Read a JSON array of records from a reader.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_reader(reader)?;
    into_records(value)
}

/// Parse a JSON array of records from a string.
pub fn parse_records(json: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(json)?;
    into_records(value)
}

fn into_records(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(records) => Ok(records),
        other => Err(Error::malformed(
            0,
            "<root>",
            format!("must be an array of records, got {}", json_kind(&other)),
        )),
    }
}

/// Detect the record shape of a JSON input.
///
/// # Returns
/// * `InputFormat::FontMismatch` if the first record has a `reason` field (or the input is empty)
/// * `InputFormat::Canonical` if the first record has an `element` field
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_input_format(records: &[Value]) -> Result<InputFormat> {
    let Some(first) = records.first() else {
        return Ok(InputFormat::FontMismatch);
    };

    let Some(object) = first.as_object() else {
        return Err(Error::malformed(0, "<record>", "must be a JSON object"));
    };

    if object.contains_key("reason") {
        Ok(InputFormat::FontMismatch)
    } else if object.contains_key("element") {
        Ok(InputFormat::Canonical)
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Short name of a JSON value's type for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_font_mismatch() {
        let records = vec![json!({"line": 1, "text": "Hi", "reason": "Font is 'Arial'"})];
        assert_eq!(
            detect_input_format(&records).unwrap(),
            InputFormat::FontMismatch
        );
    }

    #[test]
    fn test_detect_canonical() {
        let records = vec![json!({"element": "Logo", "type": "logo"})];
        assert_eq!(detect_input_format(&records).unwrap(), InputFormat::Canonical);
    }

    #[test]
    fn test_detect_empty() {
        assert_eq!(detect_input_format(&[]).unwrap(), InputFormat::FontMismatch);
    }

    #[test]
    fn test_detect_unknown_shape() {
        let records = vec![json!({"foo": 1})];
        assert!(matches!(
            detect_input_format(&records),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_detect_non_object() {
        let records = vec![json!(42)];
        assert!(matches!(
            detect_input_format(&records),
            Err(Error::MalformedInput { index: 0, .. })
        ));
    }

    #[test]
    fn test_parse_records_requires_array() {
        let err = parse_records("{\"line\": 1}").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { ref field, .. } if field == "<root>"));
    }

    #[test]
    fn test_parse_records_invalid_json() {
        assert!(matches!(parse_records("[{"), Err(Error::Json(_))));
    }
}
