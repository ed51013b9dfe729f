//! Table geometry.

use super::encoding::encode_win_ansi;
use super::metrics::{Font, CAP_HEIGHT};
use crate::render::options::{COLUMN_HEADERS, PAGE_COLUMN};

/// Horizontal cell padding on each side.
pub const CELL_PADDING_X: f32 = 6.0;

/// Vertical cell padding above and below the text line.
pub const CELL_PADDING_Y: f32 = 3.0;

/// Horizontal alignment of a cell's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Column positions and row height of the report table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    /// Left edge of the table
    pub x: f32,
    /// Column widths including padding
    pub widths: Vec<f32>,
    /// Height of every row
    pub row_height: f32,
    /// Font size of cell text
    pub font_size: f32,
}

impl TableLayout {
    /// Size columns to their widest cell and center the table in the frame.
    ///
    /// A table wider than the frame starts at the left margin and overflows
    /// to the right.
    pub fn compute(
        body: &[[String; 6]],
        font_size: f32,
        frame_left: f32,
        frame_width: f32,
    ) -> Self {
        let mut widths: Vec<f32> = COLUMN_HEADERS
            .iter()
            .map(|h| cell_width(h, font_size))
            .collect();

        for cells in body {
            for (width, cell) in widths.iter_mut().zip(cells.iter()) {
                *width = width.max(cell_width(cell, font_size));
            }
        }

        let total: f32 = widths.iter().sum();
        let x = if total < frame_width {
            frame_left + (frame_width - total) / 2.0
        } else {
            frame_left
        };

        Self {
            x,
            widths,
            row_height: font_size * 1.2 + 2.0 * CELL_PADDING_Y,
            font_size,
        }
    }

    /// Total table width.
    pub fn width(&self) -> f32 {
        self.widths.iter().sum()
    }

    /// Left edge of each column.
    pub fn column_lefts(&self) -> Vec<f32> {
        self.widths
            .iter()
            .scan(self.x, |left, width| {
                let current = *left;
                *left += width;
                Some(current)
            })
            .collect()
    }

    /// Alignment of a body cell.
    pub fn body_align(column: usize) -> Align {
        if column == PAGE_COLUMN {
            Align::Center
        } else {
            Align::Left
        }
    }

    /// Text origin inside a cell whose bottom-left corner is at (`left`, `bottom`).
    pub fn text_origin(
        &self,
        text: &str,
        left: f32,
        bottom: f32,
        column: usize,
        align: Align,
    ) -> (f32, f32) {
        let cap = CAP_HEIGHT * self.font_size / 1000.0;
        let baseline = bottom + (self.row_height - cap) / 2.0;
        let x = match align {
            Align::Left => left + CELL_PADDING_X,
            Align::Center => {
                let encoded = encode_win_ansi(text);
                let text_width = Font::Helvetica.text_width(&encoded, self.font_size);
                left + (self.widths[column] - text_width) / 2.0
            }
        };
        (x, baseline)
    }
}

fn cell_width(text: &str, font_size: f32) -> f32 {
    Font::Helvetica.text_width(&encode_win_ansi(text), font_size) + 2.0 * CELL_PADDING_X
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(element: &str) -> Vec<[String; 6]> {
        vec![[element, "font", "Calibri", "Arial", "12", "low"].map(String::from)]
    }

    #[test]
    fn test_columns_fit_widest_cell() {
        let narrow = TableLayout::compute(&body("A"), 10.0, 72.0, 451.0);
        let wide = TableLayout::compute(&body("A much longer element"), 10.0, 72.0, 451.0);
        assert!(wide.widths[0] > narrow.widths[0]);
        assert_eq!(wide.widths[1], narrow.widths[1]);
    }

    #[test]
    fn test_header_sets_minimum_width() {
        let layout = TableLayout::compute(&[], 10.0, 72.0, 451.0);
        let expected = Font::Helvetica.text_width(b"Severity", 10.0) + 2.0 * CELL_PADDING_X;
        assert!((layout.widths[5] - expected).abs() < 1e-3);
    }

    #[test]
    fn test_table_is_centered() {
        let layout = TableLayout::compute(&body("x"), 10.0, 72.0, 451.0);
        let right_gap = 72.0 + 451.0 - (layout.x + layout.width());
        assert!((layout.x - 72.0 - right_gap).abs() < 1e-3);
    }

    #[test]
    fn test_overwide_table_starts_at_margin() {
        let layout = TableLayout::compute(&body(&"W".repeat(80)), 10.0, 72.0, 451.0);
        assert_eq!(layout.x, 72.0);
    }

    #[test]
    fn test_column_lefts_accumulate() {
        let layout = TableLayout::compute(&body("x"), 10.0, 72.0, 451.0);
        let lefts = layout.column_lefts();
        assert_eq!(lefts[0], layout.x);
        assert!((lefts[1] - (layout.x + layout.widths[0])).abs() < 1e-3);
    }

    #[test]
    fn test_page_column_is_centered() {
        assert_eq!(TableLayout::body_align(PAGE_COLUMN), Align::Center);
        assert_eq!(TableLayout::body_align(0), Align::Left);
    }
}
