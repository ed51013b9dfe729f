//! Report model types.
//!
//! A [`ReportRow`] is the renderer-agnostic form of one mismatch; both the
//! console and the PDF renderer consume the same slice of rows.

mod row;
mod severity;

pub use row::ReportRow;
pub use severity::{color_for, ColorToken, Severity};
