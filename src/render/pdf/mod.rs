//! PDF report rendering.
//!
//! The report is a single flow of blocks: optional logo, title, the
//! mismatch table and a legend line. Rows that do not fit on a page
//! continue on the next one below a repeated header row.

mod canvas;
mod encoding;
mod layout;
mod logo;
mod metrics;

pub use encoding::encode_win_ansi;
pub use layout::{Align, TableLayout};
pub use logo::LogoImage;
pub use metrics::Font;

use self::canvas::Canvas;
use super::options::{PdfOptions, COLUMN_HEADERS};
use crate::error::Result;
use crate::model::ReportRow;
use chrono::Utc;
use lopdf::{dictionary, Document, Object};
use std::path::{Path, PathBuf};

const LOGO_RESOURCE: &str = "Im1";
const GRID_LINE_WIDTH: f32 = 1.0;
const TITLE_LEADING: f32 = 1.2;

/// Outcome of rendering a PDF report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfSummary {
    /// Number of pages written
    pub pages: usize,
    /// Number of table body rows
    pub rows: usize,
    /// Whether the logo was embedded
    pub logo_embedded: bool,
    /// Output path, when the report was saved to a file
    pub path: Option<PathBuf>,
}

/// Renders report rows into a PDF document.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    options: PdfOptions,
}

impl PdfRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: PdfOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &PdfOptions {
        &self.options
    }

    /// Render the report to bytes.
    ///
    /// A logo that cannot be read or decoded is logged and left out.
    pub fn render_bytes(
        &self,
        rows: &[ReportRow],
        logo: Option<&Path>,
    ) -> Result<(Vec<u8>, PdfSummary)> {
        let logo = logo.and_then(|path| match LogoImage::load(path) {
            Ok(image) => Some(image),
            Err(e) => {
                log::warn!("skipping logo: {}", e);
                None
            }
        });
        self.render_with_logo(rows, logo.as_ref())
    }

    /// Render the report to bytes with an already decoded logo.
    pub fn render_with_logo(
        &self,
        rows: &[ReportRow],
        logo: Option<&LogoImage>,
    ) -> Result<(Vec<u8>, PdfSummary)> {
        let pages = self.layout_pages(rows, logo.is_some());
        log::debug!("laid out {} rows on {} pages", rows.len(), pages.len());

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(font_dict(Font::Helvetica));
        let bold_id = doc.add_object(font_dict(Font::HelveticaBold));
        let mut resources = dictionary! {
            "Font" => dictionary! {
                Font::Helvetica.resource_name() => regular_id,
                Font::HelveticaBold.resource_name() => bold_id,
            },
        };
        if let Some(image) = logo {
            let image_id = image.embed(&mut doc);
            resources.set("XObject", dictionary! { LOGO_RESOURCE => image_id });
        }
        let resources_id = doc.add_object(resources);

        let (page_width, page_height) = self.options.page_size;
        let page_count = pages.len();
        let mut kids = Vec::with_capacity(page_count);
        for canvas in pages {
            let content = canvas.finish()?;
            let content_id = doc.add_object(lopdf::Stream::new(dictionary! {}, content));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(page_width),
                    Object::Real(page_height),
                ],
            });
            kids.push(Object::from(page_id));
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count as i64,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let created = self.options.created_at.unwrap_or_else(Utc::now);
        let producer = format!("stylereport {}", env!("CARGO_PKG_VERSION"));
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(encode_win_ansi(&self.options.title)),
            "Producer" => Object::string_literal(producer),
            "CreationDate" => Object::string_literal(created.format("D:%Y%m%d%H%M%SZ").to_string()),
        });
        doc.trailer.set("Info", info_id);

        if self.options.compress {
            doc.compress();
        }

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;

        Ok((
            bytes,
            PdfSummary {
                pages: page_count,
                rows: rows.len(),
                logo_embedded: logo.is_some(),
                path: None,
            },
        ))
    }

    /// Render the report and write it to `output`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(
        &self,
        rows: &[ReportRow],
        output: P,
        logo: Option<&Path>,
    ) -> Result<PdfSummary> {
        let output = output.as_ref();
        let (bytes, mut summary) = self.render_bytes(rows, logo)?;
        std::fs::write(output, bytes)?;
        log::info!("PDF report written: {}", output.display());
        summary.path = Some(output.to_path_buf());
        Ok(summary)
    }

    /// Place every block and return one canvas per page.
    fn layout_pages(&self, rows: &[ReportRow], with_logo: bool) -> Vec<Canvas> {
        let options = &self.options;
        let (page_width, page_height) = options.page_size;
        let margin = options.margin;
        let frame_width = page_width - 2.0 * margin;
        let top = page_height - margin;

        let mut flow = Flow::new(top, margin);

        if with_logo {
            let (logo_width, logo_height) = options.logo_size;
            let x = margin + frame_width - logo_width;
            let y = flow.cursor - logo_height;
            flow.canvas.image(LOGO_RESOURCE, x, y, logo_width, logo_height);
            flow.advance(logo_height + options.spacing);
        }

        let title_height = options.title_size * TITLE_LEADING;
        flow.ensure(title_height);
        let title_width =
            Font::HelveticaBold.text_width(&encode_win_ansi(&options.title), options.title_size);
        flow.canvas.text(
            margin + (frame_width - title_width) / 2.0,
            flow.cursor - options.title_size,
            Font::HelveticaBold,
            options.title_size,
            &options.title,
        );
        flow.advance(title_height + options.spacing);

        let body: Vec<[String; 6]> = rows.iter().map(ReportRow::cells).collect();
        let table = TableLayout::compute(&body, options.font_size, margin, frame_width);

        // Keep the header together with the first row.
        let lead_rows = if body.is_empty() { 1.0 } else { 2.0 };
        flow.ensure(table.row_height * lead_rows);
        self.draw_header(&mut flow, &table);
        for (row, cells) in rows.iter().zip(&body) {
            if flow.ensure(table.row_height) {
                self.draw_header(&mut flow, &table);
            }
            self.draw_row(&mut flow, &table, cells, row);
        }
        flow.advance(options.spacing);

        let legend_height = options.font_size * 1.2;
        flow.ensure(legend_height);
        flow.canvas.text(
            margin,
            flow.cursor - options.font_size,
            Font::Helvetica,
            options.font_size,
            &options.legend_text(),
        );

        flow.finish()
    }

    fn draw_header(&self, flow: &mut Flow, table: &TableLayout) {
        let bottom = flow.cursor - table.row_height;
        let palette = &self.options.palette;
        flow.canvas
            .fill_rect(table.x, bottom, table.width(), table.row_height, palette.header);
        let lefts = table.column_lefts();
        for (column, (label, left)) in COLUMN_HEADERS.iter().zip(lefts).enumerate() {
            self.draw_cell(flow, table, label, left, bottom, column, Align::Left);
        }
        flow.advance(table.row_height);
    }

    fn draw_row(
        &self,
        flow: &mut Flow,
        table: &TableLayout,
        cells: &[String; 6],
        row: &ReportRow,
    ) {
        let bottom = flow.cursor - table.row_height;
        let fill = self.options.palette.fill(row.severity.color());
        flow.canvas.fill_rect(table.x, bottom, table.width(), table.row_height, fill);
        for (column, (cell, left)) in cells.iter().zip(table.column_lefts()).enumerate() {
            let align = TableLayout::body_align(column);
            self.draw_cell(flow, table, cell, left, bottom, column, align);
        }
        flow.advance(table.row_height);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        flow: &mut Flow,
        table: &TableLayout,
        text: &str,
        left: f32,
        bottom: f32,
        column: usize,
        align: Align,
    ) {
        flow.canvas.stroke_rect(
            left,
            bottom,
            table.widths[column],
            table.row_height,
            GRID_LINE_WIDTH,
            self.options.palette.grid,
        );
        let (x, y) = table.text_origin(text, left, bottom, column, align);
        flow.canvas.text(x, y, Font::Helvetica, table.font_size, text);
    }
}

/// Vertical cursor over a sequence of pages.
struct Flow {
    top: f32,
    bottom: f32,
    cursor: f32,
    canvas: Canvas,
    finished: Vec<Canvas>,
}

impl Flow {
    fn new(top: f32, bottom: f32) -> Self {
        Self {
            top,
            bottom,
            cursor: top,
            canvas: Canvas::new(),
            finished: Vec::new(),
        }
    }

    fn advance(&mut self, height: f32) {
        self.cursor -= height;
    }

    /// Start a new page unless `height` fits below the cursor.
    /// Returns whether a page break happened.
    fn ensure(&mut self, height: f32) -> bool {
        if self.cursor - height >= self.bottom || self.cursor >= self.top {
            return false;
        }
        let full = std::mem::take(&mut self.canvas);
        self.finished.push(full);
        self.cursor = self.top;
        true
    }

    fn finish(mut self) -> Vec<Canvas> {
        if !self.canvas.is_empty() || self.finished.is_empty() {
            self.finished.push(self.canvas);
        }
        self.finished
    }
}

fn font_dict(font: Font) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}

/// Render rows to `output_path`, with an optional logo.
///
/// The logo is best-effort; only failing to write the output is an error.
pub fn render_pdf<P: AsRef<Path>>(
    rows: &[ReportRow],
    output_path: P,
    logo_path: Option<&Path>,
    options: &PdfOptions,
) -> Result<PdfSummary> {
    PdfRenderer::new(options.clone()).save(rows, output_path, logo_path)
}
