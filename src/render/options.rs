//! Rendering options and configuration.

use crate::model::{ColorToken, Severity};
use chrono::{DateTime, Utc};
use colored::Color;

/// Column labels shared by the console table and the PDF table.
pub const COLUMN_HEADERS: [&str; 6] = ["Element", "Type", "Expected", "Found", "Page", "Severity"];

/// Index of the page column.
pub const PAGE_COLUMN: usize = 4;

/// Fixed console column widths in characters. The severity column is last
/// and unpadded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Element column
    pub element: usize,
    /// Type column
    pub kind: usize,
    /// Expected column
    pub expected: usize,
    /// Found column
    pub found: usize,
    /// Page column
    pub page: usize,
}

impl ColumnWidths {
    /// Widths of the padded columns in order.
    pub fn as_array(&self) -> [usize; 5] {
        [self.element, self.kind, self.expected, self.found, self.page]
    }
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            element: 15,
            kind: 12,
            expected: 12,
            found: 12,
            page: 6,
        }
    }
}

/// Terminal colors per color token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsolePalette {
    /// Low severity
    pub green: Color,
    /// Medium severity
    pub yellow: Color,
    /// High severity
    pub red: Color,
}

impl ConsolePalette {
    /// Terminal color of a token.
    pub fn color(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Green => self.green,
            ColorToken::Yellow => self.yellow,
            ColorToken::Red => self.red,
        }
    }

    /// ANSI escape sequence selecting the foreground color of a token.
    pub fn ansi_prefix(&self, token: ColorToken) -> String {
        format!("\x1b[{}m", self.color(token).to_fg_str())
    }
}

impl Default for ConsolePalette {
    fn default() -> Self {
        Self {
            green: Color::BrightGreen,
            yellow: Color::BrightYellow,
            red: Color::BrightRed,
        }
    }
}

/// Options for the console table.
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    /// Line printed above the table (None = no heading)
    pub heading: Option<String>,

    /// Column widths
    pub widths: ColumnWidths,

    /// Terminal colors
    pub palette: ConsolePalette,

    /// Emit ANSI color sequences
    pub color: bool,
}

impl ConsoleOptions {
    /// Create new console options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the heading line.
    pub fn with_heading(mut self, heading: Option<String>) -> Self {
        self.heading = heading;
        self
    }

    /// Set the column widths.
    pub fn with_widths(mut self, widths: ColumnWidths) -> Self {
        self.widths = widths;
        self
    }

    /// Set the terminal palette.
    pub fn with_palette(mut self, palette: ConsolePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Enable or disable ANSI colors.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            heading: Some("Mismatch report:".to_string()),
            widths: ColumnWidths::default(),
            palette: ConsolePalette::default(),
            color: true,
        }
    }
}

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb {
    /// Create a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Channels scaled to 0.0-1.0 for PDF color operators.
    pub fn components(&self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

/// PDF fill colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfPalette {
    /// Low severity rows
    pub green: Rgb,
    /// Medium severity rows
    pub yellow: Rgb,
    /// High severity rows
    pub red: Rgb,
    /// Header row background
    pub header: Rgb,
    /// Grid lines
    pub grid: Rgb,
}

impl PdfPalette {
    /// Row background of a token.
    pub fn fill(&self, token: ColorToken) -> Rgb {
        match token {
            ColorToken::Green => self.green,
            ColorToken::Yellow => self.yellow,
            ColorToken::Red => self.red,
        }
    }
}

impl Default for PdfPalette {
    fn default() -> Self {
        Self {
            green: Rgb::new(0x90, 0xEE, 0x90),
            yellow: Rgb::new(0xFF, 0xFF, 0x00),
            red: Rgb::new(0xFA, 0x80, 0x72),
            header: Rgb::new(0xD3, 0xD3, 0xD3),
            grid: Rgb::new(0, 0, 0),
        }
    }
}

/// Options for the PDF report.
#[derive(Debug, Clone)]
pub struct PdfOptions {
    /// Document title, shown at the top and stored in the document info
    pub title: String,

    /// Page width and height in points
    pub page_size: (f32, f32),

    /// Margin on all four sides in points
    pub margin: f32,

    /// Table and legend font size
    pub font_size: f32,

    /// Title font size
    pub title_size: f32,

    /// Logo box width and height in points
    pub logo_size: (f32, f32),

    /// Vertical gap after the logo, title and table
    pub spacing: f32,

    /// Legend text (None = derived from the palette)
    pub legend: Option<String>,

    /// Fill colors
    pub palette: PdfPalette,

    /// Compress content streams
    pub compress: bool,

    /// Creation timestamp (None = now)
    pub created_at: Option<DateTime<Utc>>,
}

impl PdfOptions {
    /// A4 portrait in points.
    pub const A4: (f32, f32) = (595.28, 841.89);

    /// Create new PDF options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the page size in points.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_size = (width, height);
        self
    }

    /// Set the margin in points.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Set the logo box size in points.
    pub fn with_logo_size(mut self, width: f32, height: f32) -> Self {
        self.logo_size = (width, height);
        self
    }

    /// Override the legend text.
    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    /// Set the fill palette.
    pub fn with_palette(mut self, palette: PdfPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Enable or disable stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Fix the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Legend line, e.g. "Legend: High = red, Medium = yellow, Low = green".
    pub fn legend_text(&self) -> String {
        if let Some(ref legend) = self.legend {
            return legend.clone();
        }
        let entries: Vec<String> = Severity::ALL
            .iter()
            .rev()
            .map(|s| format!("{} = {}", s.title(), s.color().name()))
            .collect();
        format!("Legend: {}", entries.join(", "))
    }
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            title: "Document Style Check Report".to_string(),
            page_size: Self::A4,
            margin: 72.0,
            font_size: 10.0,
            title_size: 18.0,
            logo_size: (100.0, 50.0),
            spacing: 12.0,
            legend: None,
            palette: PdfPalette::default(),
            compress: true,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_widths() {
        assert_eq!(ColumnWidths::default().as_array(), [15, 12, 12, 12, 6]);
    }

    #[test]
    fn test_ansi_prefix_defaults() {
        let palette = ConsolePalette::default();
        assert_eq!(palette.ansi_prefix(ColorToken::Green), "\x1b[92m");
        assert_eq!(palette.ansi_prefix(ColorToken::Yellow), "\x1b[93m");
        assert_eq!(palette.ansi_prefix(ColorToken::Red), "\x1b[91m");
    }

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(Rgb::from_hex("#FA8072"), Some(Rgb::new(0xFA, 0x80, 0x72)));
        assert_eq!(Rgb::from_hex("90ee90"), Some(Rgb::new(0x90, 0xEE, 0x90)));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_rgb_components() {
        assert_eq!(Rgb::new(255, 0, 255).components(), [1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_default_legend() {
        assert_eq!(
            PdfOptions::default().legend_text(),
            "Legend: High = red, Medium = yellow, Low = green"
        );
    }

    #[test]
    fn test_legend_override() {
        let options = PdfOptions::new().with_legend("Key");
        assert_eq!(options.legend_text(), "Key");
    }
}
