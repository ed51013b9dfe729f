//! JSON export of normalized rows.
//!
//! Rows are written in canonical shape (`element`, `type`, `expected`,
//! `found`, `page`, `severity`), so an export can be fed back in as input.

use crate::error::{Error, Result};
use crate::model::ReportRow;
use serde::Serialize;
use std::io::Write;

/// Layout of exported JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Two-space indentation, one field per line
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// Stream rows as a JSON array into `writer`.
pub fn write_json<W: Write>(writer: W, rows: &[ReportRow], format: JsonFormat) -> Result<()> {
    match format {
        JsonFormat::Pretty => {
            let mut serializer = serde_json::Serializer::pretty(writer);
            rows.serialize(&mut serializer)?;
        }
        JsonFormat::Compact => {
            let mut serializer = serde_json::Serializer::new(writer);
            rows.serialize(&mut serializer)?;
        }
    }
    Ok(())
}

/// Serialize rows into a JSON string.
pub fn to_json(rows: &[ReportRow], format: JsonFormat) -> Result<String> {
    let mut buffer = Vec::with_capacity(rows.len() * 128);
    write_json(&mut buffer, rows, format)?;
    String::from_utf8(buffer).map_err(|e| Error::Render(e.to_string()))
}
