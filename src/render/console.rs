//! Fixed-width console table.

use super::options::{ConsoleOptions, COLUMN_HEADERS};
use crate::error::Result;
use crate::model::ReportRow;
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";

/// Renders report rows as a colorized fixed-width table.
#[derive(Debug, Clone, Default)]
pub struct ConsoleRenderer {
    options: ConsoleOptions,
}

impl ConsoleRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: ConsoleOptions) -> Self {
        Self { options }
    }

    /// Render the table into a string, one line per row plus heading and header.
    pub fn render(&self, rows: &[ReportRow]) -> String {
        let mut output = String::new();

        if let Some(ref heading) = self.options.heading {
            output.push_str(heading);
            output.push('\n');
        }

        output.push_str(&self.format_line(&COLUMN_HEADERS));
        output.push('\n');

        for row in rows {
            let cells = row.cells();
            let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
            let line = self.format_line(&cells);
            if self.options.color {
                output.push_str(&self.options.palette.ansi_prefix(row.severity.color()));
                output.push_str(&line);
                output.push_str(RESET);
            } else {
                output.push_str(&line);
            }
            output.push('\n');
        }

        output
    }

    /// Write the table to a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W, rows: &[ReportRow]) -> Result<()> {
        writer.write_all(self.render(rows).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Left-align the first five cells to their widths; the last cell is unpadded.
    fn format_line(&self, cells: &[&str]) -> String {
        let widths = self.options.widths.as_array();
        let mut line = String::new();
        for (cell, width) in cells.iter().zip(widths) {
            line.push_str(&format!("{:<width$}", cell, width = width));
        }
        for cell in cells.iter().skip(widths.len()) {
            line.push_str(cell);
        }
        line
    }
}

/// Print the table to standard output.
pub fn render_console(rows: &[ReportRow], options: &ConsoleOptions) -> Result<()> {
    let renderer = ConsoleRenderer::new(options.clone());
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    renderer.write_to(&mut handle, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;

    #[test]
    fn test_header_only_for_empty_rows() {
        let renderer = ConsoleRenderer::new(ConsoleOptions::new().with_heading(None));
        assert_eq!(
            renderer.render(&[]),
            "Element        Type        Expected    Found       Page  Severity\n"
        );
    }

    #[test]
    fn test_row_is_wrapped_in_color_codes() {
        let rows = vec![ReportRow::new("Logo", "logo", "a", "b", 1, Severity::High)];
        let output = ConsoleRenderer::default().render(&rows);
        let last = output.lines().last().unwrap();
        assert!(last.starts_with("\x1b[91mLogo"));
        assert!(last.ends_with("high\x1b[0m"));
    }

    #[test]
    fn test_overlong_values_are_not_truncated() {
        let rows = vec![ReportRow::new(
            "A very long element label",
            "font",
            "x",
            "y",
            1,
            Severity::Low,
        )];
        let renderer = ConsoleRenderer::new(ConsoleOptions::new().with_color(false));
        assert!(renderer.render(&rows).contains("A very long element labelfont"));
    }
}
