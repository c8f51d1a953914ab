#![forbid(unsafe_code)]

//! Single-line static text.

use decipher_core::geometry::Rect;
use decipher_render::buffer::Buffer;
use decipher_render::style::Style;

use crate::{Widget, draw_text_span};

/// A one-row text widget, clipped to its area.
#[derive(Debug, Clone, Copy, Default)]
pub struct Label<'a> {
    text: &'a str,
    style: Style,
}

impl<'a> Label<'a> {
    /// Create a label over `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            style: Style::default(),
        }
    }

    /// Set the label style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for Label<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.text.is_empty() {
            return;
        }
        draw_text_span(buf, area.left(), area.top(), self.text, self.style, area.right());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decipher_render::cell::StyleFlags;

    #[test]
    fn renders_text_at_origin() {
        let mut buf = Buffer::new(8, 1);
        Label::new("status").render(Rect::from_size(8, 1), &mut buf);
        assert_eq!(buf.row_text(0), "status  ");
    }

    #[test]
    fn clips_to_area() {
        let mut buf = Buffer::new(8, 1);
        Label::new("overflowing").render(Rect::from_size(4, 1), &mut buf);
        assert_eq!(buf.row_text(0), "over    ");
    }

    #[test]
    fn styled_label() {
        let mut buf = Buffer::new(4, 1);
        Label::new("hi").style(Style::new().bold()).render(Rect::from_size(4, 1), &mut buf);
        assert_eq!(buf.get(0, 0).unwrap().attrs, StyleFlags::BOLD);
    }

    #[test]
    fn empty_text_is_a_noop() {
        let mut buf = Buffer::new(4, 1);
        Label::new("").render(Rect::from_size(4, 1), &mut buf);
        assert_eq!(buf.row_text(0), "    ");
    }
}
