//! Content-stream operations for one page.

use super::encoding::encode_win_ansi;
use super::metrics::Font;
use crate::render::options::Rgb;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Accumulates drawing operations for a single page.
#[derive(Debug, Default)]
pub(super) struct Canvas {
    operations: Vec<Operation>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill a rectangle with `color`.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        let [r, g, b] = color.components();
        self.push("q", vec![]);
        self.push("rg", vec![r.into(), g.into(), b.into()]);
        self.push("re", vec![x.into(), y.into(), width.into(), height.into()]);
        self.push("f", vec![]);
        self.push("Q", vec![]);
    }

    /// Stroke a rectangle outline.
    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, line: f32, color: Rgb) {
        let [r, g, b] = color.components();
        self.push("q", vec![]);
        self.push("RG", vec![r.into(), g.into(), b.into()]);
        self.push("w", vec![line.into()]);
        self.push("re", vec![x.into(), y.into(), width.into(), height.into()]);
        self.push("S", vec![]);
        self.push("Q", vec![]);
    }

    /// Draw a single line of text with its baseline at `y`.
    pub fn text(&mut self, x: f32, y: f32, font: Font, size: f32, text: &str) {
        self.push("BT", vec![]);
        self.push("Tf", vec![Object::Name(font.resource_name().into()), size.into()]);
        self.push("Td", vec![x.into(), y.into()]);
        self.push(
            "Tj",
            vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    /// Paint an image XObject into the given box.
    pub fn image(&mut self, name: &str, x: f32, y: f32, width: f32, height: f32) {
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![width.into(), 0.into(), 0.into(), height.into(), x.into(), y.into()],
        );
        self.push("Do", vec![Object::Name(name.into())]);
        self.push("Q", vec![]);
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Encode the operations as a content stream.
    pub fn finish(self) -> lopdf::Result<Vec<u8>> {
        Content {
            operations: self.operations,
        }
        .encode()
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_literal_string() {
        let mut canvas = Canvas::new();
        canvas.text(72.0, 700.0, Font::Helvetica, 10.0, "Found");
        let bytes = canvas.finish().unwrap();
        let content = String::from_utf8_lossy(&bytes);
        assert!(content.contains("/F1"));
        assert!(content.contains("Tf"));
        assert!(content.contains("(Found) Tj"));
    }

    #[test]
    fn test_fill_rect_sets_color() {
        let mut canvas = Canvas::new();
        canvas.fill_rect(0.0, 0.0, 10.0, 5.0, Rgb::new(255, 255, 0));
        let bytes = canvas.finish().unwrap();
        let content = String::from_utf8_lossy(&bytes);
        assert!(content.contains("rg"));
        assert!(content.contains("re\n"));
    }
}
