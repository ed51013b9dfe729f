//! Rendering module for turning report rows into output formats.

mod console;
mod json;
mod options;
pub mod pdf;

pub use console::{render_console, ConsoleRenderer};
pub use json::{to_json, write_json, JsonFormat};
pub use options::{
    ColumnWidths, ConsoleOptions, ConsolePalette, PdfOptions, PdfPalette, Rgb, COLUMN_HEADERS,
    PAGE_COLUMN,
};
pub use pdf::{render_pdf, PdfRenderer, PdfSummary};
