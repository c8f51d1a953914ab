#![forbid(unsafe_code)]

//! Cell types.
//!
//! One [`Cell`] per grid position: a `char` plus packed colors and attribute
//! flags. Wide glyphs occupy their leading cell; the cells they spill into
//! are marked with [`Cell::CONTINUATION_CHAR`] so presenters can skip them.

/// RGBA color packed into a `u32` (`0xRRGGBBAA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PackedRgba(u32);

impl PackedRgba {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0);

    /// Create an opaque color from RGB channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create a color from RGBA channels.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }
}

impl Default for PackedRgba {
    fn default() -> Self {
        Self::WHITE
    }
}

bitflags::bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM = 0b0000_0010;
        /// Italic text.
        const ITALIC = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE = 0b0000_1000;
    }
}

impl Default for StyleFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// One grid position: glyph, colors, attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The displayed glyph. `' '` for empty cells.
    pub ch: char,
    /// Foreground color.
    pub fg: PackedRgba,
    /// Background color.
    pub bg: PackedRgba,
    /// Attribute flags.
    pub attrs: StyleFlags,
}

impl Cell {
    /// Marker stored in the trailing cell of a double-width glyph.
    pub const CONTINUATION_CHAR: char = '\0';

    /// An empty cell: space, white on transparent, no attributes.
    pub const EMPTY: Self = Self {
        ch: ' ',
        fg: PackedRgba::WHITE,
        bg: PackedRgba::TRANSPARENT,
        attrs: StyleFlags::empty(),
    };

    /// Create a cell holding `ch` with default colors and no attributes.
    #[inline]
    pub const fn from_char(ch: char) -> Self {
        Self {
            ch,
            fg: PackedRgba::WHITE,
            bg: PackedRgba::TRANSPARENT,
            attrs: StyleFlags::empty(),
        }
    }

    /// Whether this cell is the spill-over of a wide glyph to its left.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.ch == Self::CONTINUATION_CHAR
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_round_trips_channels() {
        let c = PackedRgba::rgba(1, 2, 3, 4);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1, 2, 3, 4));
    }

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(PackedRgba::rgb(10, 20, 30).a(), 255);
    }

    #[test]
    fn default_cell_is_empty() {
        let cell = Cell::default();
        assert_eq!(cell, Cell::EMPTY);
        assert_eq!(cell.ch, ' ');
        assert!(cell.attrs.is_empty());
        assert!(!cell.is_continuation());
    }

    #[test]
    fn continuation_marker() {
        let cell = Cell::from_char(Cell::CONTINUATION_CHAR);
        assert!(cell.is_continuation());
    }

    #[test]
    fn flags_combine() {
        let flags = StyleFlags::BOLD | StyleFlags::UNDERLINE;
        assert!(flags.contains(StyleFlags::BOLD));
        assert!(!flags.contains(StyleFlags::DIM));
    }
}
