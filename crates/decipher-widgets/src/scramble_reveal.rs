#![forbid(unsafe_code)]

//! Scramble-reveal text widget.
//!
//! Draws one [`RevealRun`] into a buffer row: revealed characters in one
//! style, still-scrambled characters in another. The widget itself is pure
//! configuration; all animation state lives in the run, so the same widget
//! value can render any number of runs.
//!
//! # Example
//!
//! ```
//! use decipher_core::reveal::RevealRun;
//! use decipher_core::geometry::Rect;
//! use decipher_render::{Buffer, PackedRgba, Style};
//! use decipher_widgets::{ScrambleReveal, StatefulWidget};
//! use std::time::Duration;
//!
//! let widget = ScrambleReveal::new()
//!     .revealed_style(Style::new().fg(PackedRgba::rgb(120, 220, 160)))
//!     .scrambled_style(Style::new().dim());
//!
//! let mut run = RevealRun::new("CODEX").reveal_delay(Duration::from_millis(10));
//! run.tick(Duration::from_millis(60));
//! let mut buf = Buffer::new(10, 1);
//! widget.render(Rect::from_size(10, 1), &mut buf, &mut run);
//! assert_eq!(buf.row_text(0), "CODEX     ");
//! ```

use decipher_core::geometry::Rect;
use decipher_core::reveal::RevealRun;
use decipher_render::buffer::Buffer;
use decipher_render::style::Style;
use unicode_width::UnicodeWidthChar;

use crate::{StatefulWidget, draw_glyph};

/// A widget that displays a [`RevealRun`] with per-phase styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrambleReveal {
    revealed_style: Style,
    scrambled_style: Style,
}

impl ScrambleReveal {
    /// Create a widget with unstyled output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Style for characters already revealed.
    #[must_use]
    pub fn revealed_style(mut self, style: Style) -> Self {
        self.revealed_style = style;
        self
    }

    /// Style for characters still scrambled. Applies to not-yet-revealed
    /// spaces too, so a background color covers the whole span evenly.
    #[must_use]
    pub fn scrambled_style(mut self, style: Style) -> Self {
        self.scrambled_style = style;
        self
    }
}

impl StatefulWidget for ScrambleReveal {
    type State = RevealRun;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "ScrambleReveal",
            len = state.len(),
            revealed = state.revealed()
        )
        .entered();

        if area.is_empty() || state.is_empty() {
            return;
        }

        let y = area.top();
        let max_x = area.right();
        let mut x = area.left();

        for index in 0..state.len() {
            if x >= max_x {
                break;
            }
            let Some(ch) = state.display_char(index) else {
                break;
            };
            let style = if state.is_revealed(index) {
                self.revealed_style
            } else {
                self.scrambled_style
            };
            let next = draw_glyph(buf, x, y, ch, style, max_x);
            if next == x && ch.width().unwrap_or(0) > 0 {
                // Clipped at the right edge; nothing further fits.
                break;
            }
            x = next;
        }
    }
}
