//! Error types for stylereport library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stylereport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading records or rendering reports.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The records match neither the font-check nor the canonical shape.
    #[error("Unknown input format: records have neither a 'reason' nor an 'element' field")]
    UnknownFormat,

    /// A required field is missing or has the wrong type.
    #[error("Malformed record {index}: field '{field}' {reason}")]
    MalformedInput {
        /// Zero-based position of the record in the input array
        index: usize,
        /// Name of the offending field
        field: String,
        /// What is wrong with it
        reason: String,
    },

    /// A severity label outside low/medium/high.
    #[error("Invalid severity: {0:?}")]
    InvalidSeverity(String),

    /// An auxiliary resource (the logo) could not be loaded.
    #[error("Could not load {}: {reason}", path.display())]
    ResourceLoad {
        /// Path of the resource
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },

    /// Error assembling the PDF object tree.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Error during rendering (console, PDF, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build a [`Error::MalformedInput`] for record `index`.
    pub fn malformed(index: usize, field: &str, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            index,
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::malformed(2, "reason", "is missing");
        assert_eq!(err.to_string(), "Malformed record 2: field 'reason' is missing");

        let err = Error::InvalidSeverity("urgent".to_string());
        assert_eq!(err.to_string(), "Invalid severity: \"urgent\"");
    }

    #[test]
    fn test_resource_load_display() {
        let err = Error::ResourceLoad {
            path: PathBuf::from("logo.png"),
            reason: "file not found".to_string(),
        };
        assert_eq!(err.to_string(), "Could not load logo.png: file not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_lopdf_io_error_maps_to_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = lopdf::Error::IO(io_err).into();
        assert!(matches!(err, Error::Io(_)));
    }
}
