#![forbid(unsafe_code)]

//! Widgets for decipher.
//!
//! A [`Widget`] renders itself into a [`Buffer`] within a given [`Rect`].
//! Widgets whose output depends on mutable per-run state implement
//! [`StatefulWidget`] instead, taking the state alongside the buffer.

pub mod label;
pub mod scramble_reveal;

pub use label::Label;
pub use scramble_reveal::ScrambleReveal;

use decipher_core::geometry::Rect;
use decipher_render::buffer::Buffer;
use decipher_render::cell::Cell;
use decipher_render::style::Style;
use unicode_width::UnicodeWidthChar;

/// A renderable component.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A widget that renders from mutable state.
pub trait StatefulWidget {
    /// Per-run state the widget draws from.
    type State;

    /// Render the widget into the buffer with its state.
    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State);
}

/// Draw a single glyph at `(x, y)` with a style, clipped at `max_x`
/// (exclusive). Wide glyphs get a continuation cell; a glyph that would
/// straddle `max_x` is dropped entirely.
///
/// Returns the x position after the glyph.
pub(crate) fn draw_glyph(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style, max_x: u16) -> u16 {
    let Some(width) = ch.width() else {
        return x; // Control characters occupy no cells.
    };
    let width = width as u16;
    if width == 0 || x >= max_x || x + width > max_x {
        return x;
    }
    let mut cell = Cell::from_char(ch);
    style.apply_to(&mut cell);
    buf.set(x, y, cell);
    if width == 2 {
        let mut spill = Cell::from_char(Cell::CONTINUATION_CHAR);
        style.apply_to(&mut spill);
        buf.set(x + 1, y, spill);
    }
    x + width
}

/// Draw a string into one buffer row, clipped at `max_x` (exclusive).
///
/// Returns the x position after the last drawn glyph.
pub fn draw_text_span(buf: &mut Buffer, x: u16, y: u16, content: &str, style: Style, max_x: u16) -> u16 {
    let mut x = x;
    for ch in content.chars() {
        let next = draw_glyph(buf, x, y, ch, style, max_x);
        if next == x && ch.width().unwrap_or(0) > 0 {
            break; // Clipped; everything after is clipped too.
        }
        x = next;
    }
    x
}
