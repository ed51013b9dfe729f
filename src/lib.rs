//! # stylereport
//!
//! Render document style mismatch records as a colorized console table and
//! a PDF report.
//!
//! Records come from a font-check JSON file (`line`, `text`, `reason`), from
//! a JSON file of canonical rows, or from the built-in demonstration
//! dataset. They are normalized into [`ReportRow`]s, which both renderers
//! consume unchanged and in input order.
//!
//! ## Quick Start
//!
//! ```no_run
//! use stylereport::Reporter;
//!
//! fn main() -> stylereport::Result<()> {
//!     let report = Reporter::new()
//!         .with_default_font("Montserrat")
//!         .with_logo("logo.png")
//!         .load("font_mismatches.json")?;
//!
//!     report.print_console()?;
//!     report.save_pdf("report_fontcheck.pdf")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two input shapes**: font-check output and canonical rows, detected automatically
//! - **Console table**: fixed-width columns colored by severity
//! - **PDF report**: logo, title, severity-colored table, legend
//! - **JSON export**: normalized rows in canonical shape

pub mod dataset;
pub mod detect;
pub mod error;
pub mod model;
pub mod normalize;
pub mod render;

// Re-export commonly used types
pub use dataset::demo_rows;
pub use detect::{detect_input_format, load_records, parse_records, InputFormat};
pub use error::{Error, Result};
pub use model::{color_for, ColorToken, ReportRow, Severity};
pub use normalize::{parse_font_reason, NormalizeOptions, Normalizer};
pub use render::{
    ColumnWidths, ConsoleOptions, ConsolePalette, ConsoleRenderer, JsonFormat, PdfOptions,
    PdfPalette, PdfRenderer, PdfSummary, Rgb,
};

use std::path::{Path, PathBuf};

/// Load, detect and normalize a JSON input file.
///
/// # Example
///
/// ```no_run
/// use stylereport::{load_rows, NormalizeOptions};
///
/// let rows = load_rows("font_mismatches.json", &NormalizeOptions::default()).unwrap();
/// println!("{} mismatches", rows.len());
/// ```
pub fn load_rows<P: AsRef<Path>>(path: P, options: &NormalizeOptions) -> Result<Vec<ReportRow>> {
    let records = load_records(path)?;
    Normalizer::new(options.clone()).normalize(&records, InputFormat::Auto)
}

/// Render rows as a console table string.
pub fn to_console(rows: &[ReportRow], options: &ConsoleOptions) -> String {
    ConsoleRenderer::new(options.clone()).render(rows)
}

/// Builder for loading records and producing reports.
///
/// # Example
///
/// ```no_run
/// use stylereport::{InputFormat, Reporter};
///
/// let report = Reporter::new()
///     .with_format(InputFormat::FontMismatch)
///     .with_title("Style Check")
///     .with_color(false)
///     .load("font_mismatches.json")?;
/// print!("{}", report.console());
/// # Ok::<(), stylereport::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    format: InputFormat,
    normalize_options: NormalizeOptions,
    console_options: ConsoleOptions,
    pdf_options: PdfOptions,
    logo: Option<PathBuf>,
}

impl Reporter {
    /// Create a new Reporter builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input format (default: detect).
    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the expected font used when a reason names none.
    pub fn with_default_font(mut self, font: impl Into<String>) -> Self {
        self.normalize_options = self.normalize_options.with_default_font(font);
        self
    }

    /// Set the logo placed at the top of the PDF.
    pub fn with_logo(mut self, path: impl Into<PathBuf>) -> Self {
        self.logo = Some(path.into());
        self
    }

    /// Set the PDF title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.pdf_options = self.pdf_options.with_title(title);
        self
    }

    /// Enable or disable console colors.
    pub fn with_color(mut self, color: bool) -> Self {
        self.console_options = self.console_options.with_color(color);
        self
    }

    /// Replace the normalize options.
    pub fn with_normalize_options(mut self, options: NormalizeOptions) -> Self {
        self.normalize_options = options;
        self
    }

    /// Replace the console options.
    pub fn with_console_options(mut self, options: ConsoleOptions) -> Self {
        self.console_options = options;
        self
    }

    /// Replace the PDF options.
    pub fn with_pdf_options(mut self, options: PdfOptions) -> Self {
        self.pdf_options = options;
        self
    }

    /// Load and normalize a JSON input file.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<Report> {
        let records = load_records(path)?;
        self.normalize(&records)
    }

    /// Normalize already parsed JSON records.
    pub fn normalize(self, records: &[serde_json::Value]) -> Result<Report> {
        let normalizer = Normalizer::new(self.normalize_options.clone());
        let rows = normalizer.normalize(records, self.format)?;
        Ok(self.build(rows))
    }

    /// Build a report from rows that are already canonical.
    pub fn build(self, rows: Vec<ReportRow>) -> Report {
        Report {
            rows,
            console_options: self.console_options,
            pdf_options: self.pdf_options,
            logo: self.logo,
        }
    }

    /// Build a report from the demonstration dataset.
    pub fn demo(self) -> Report {
        self.build(demo_rows())
    }
}

/// Normalized rows plus the options to render them with.
#[derive(Debug, Clone)]
pub struct Report {
    rows: Vec<ReportRow>,
    console_options: ConsoleOptions,
    pdf_options: PdfOptions,
    logo: Option<PathBuf>,
}

impl Report {
    /// Get the rows in input order.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Render the console table.
    pub fn console(&self) -> String {
        to_console(&self.rows, &self.console_options)
    }

    /// Print the console table to standard output.
    pub fn print_console(&self) -> Result<()> {
        render::render_console(&self.rows, &self.console_options)
    }

    /// Render the PDF report to bytes.
    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>> {
        let renderer = PdfRenderer::new(self.pdf_options.clone());
        let (bytes, _) = renderer.render_bytes(&self.rows, self.logo.as_deref())?;
        Ok(bytes)
    }

    /// Write the PDF report to `path`.
    pub fn save_pdf<P: AsRef<Path>>(&self, path: P) -> Result<PdfSummary> {
        PdfRenderer::new(self.pdf_options.clone()).save(&self.rows, path, self.logo.as_deref())
    }

    /// Export the rows as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.rows, format)
    }

    /// Stream the rows as JSON into `writer`.
    pub fn write_json<W: std::io::Write>(&self, writer: W, format: JsonFormat) -> Result<()> {
        render::write_json(writer, &self.rows, format)
    }
}
