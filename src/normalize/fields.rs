//! Typed field access on raw JSON records.

use crate::detect::json_kind;
use crate::error::{Error, Result};
use serde_json::Value;

/// Look up the first of `names` present in the record.
fn lookup<'a>(record: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| record.get(*name))
}

/// Required string field, accepting alias names.
pub(super) fn required_str_any<'a>(
    index: usize,
    record: &'a Value,
    names: &[&str],
) -> Result<&'a str> {
    let field = names.first().copied().unwrap_or_default();
    match lookup(record, names) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(Error::malformed(
            index,
            field,
            format!("must be a string, got {}", json_kind(other)),
        )),
        None => Err(Error::malformed(index, field, "is missing")),
    }
}

/// Required string field.
pub(super) fn required_str<'a>(index: usize, record: &'a Value, name: &str) -> Result<&'a str> {
    required_str_any(index, record, &[name])
}

/// Optional string field; present but non-string values are an error.
pub(super) fn optional_str<'a>(
    index: usize,
    record: &'a Value,
    name: &str,
) -> Result<Option<&'a str>> {
    match record.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(Error::malformed(
            index,
            name,
            format!("must be a string, got {}", json_kind(other)),
        )),
    }
}

/// Required non-negative integer field, accepting alias names.
pub(super) fn required_u32_any(index: usize, record: &Value, names: &[&str]) -> Result<u32> {
    let field = names.first().copied().unwrap_or_default();
    match lookup(record, names) {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                Error::malformed(
                    index,
                    field,
                    format!("must be a non-negative integer, got {}", n),
                )
            }),
        Some(other) => Err(Error::malformed(
            index,
            field,
            format!("must be an integer, got {}", json_kind(other)),
        )),
        None => Err(Error::malformed(index, field, "is missing")),
    }
}

/// Required line number.
pub(super) fn required_line(index: usize, record: &Value, name: &str) -> Result<u32> {
    required_u32_any(index, record, &[name])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_alias_lookup_prefers_first() {
        let record = json!({"expected": "A", "verwacht": "B"});
        assert_eq!(
            required_str_any(0, &record, &["expected", "verwacht"]).unwrap(),
            "A"
        );
        let record = json!({"verwacht": "B"});
        assert_eq!(
            required_str_any(0, &record, &["expected", "verwacht"]).unwrap(),
            "B"
        );
    }

    #[test]
    fn test_negative_integer_rejected() {
        let record = json!({"page": -1});
        assert!(required_u32_any(0, &record, &["page"]).is_err());
    }

    #[test]
    fn test_optional_str() {
        let record = json!({"text": null, "other": 1});
        assert_eq!(optional_str(0, &record, "text").unwrap(), None);
        assert_eq!(optional_str(0, &record, "missing").unwrap(), None);
        assert!(optional_str(0, &record, "other").is_err());
    }
}
