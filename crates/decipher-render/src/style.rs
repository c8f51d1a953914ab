#![forbid(unsafe_code)]

//! Flat, patch-style text styling.

use crate::cell::{Cell, PackedRgba, StyleFlags};

/// A partial style: only the set fields are applied to a cell.
///
/// # Example
///
/// ```
/// use decipher_render::{PackedRgba, Style, StyleFlags};
///
/// let emphasis = Style::new()
///     .fg(PackedRgba::rgb(120, 220, 160))
///     .bold();
/// assert_eq!(emphasis.attrs, Some(StyleFlags::BOLD));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<PackedRgba>,
    /// Background color, if set.
    pub bg: Option<PackedRgba>,
    /// Attribute flags, if set. Replaces the cell's flags wholesale.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// An empty style that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color.
    #[must_use]
    pub fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add an attribute flag on top of any already set.
    #[must_use]
    pub fn attr(mut self, flag: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default() | flag);
        self
    }

    /// Shorthand for `attr(StyleFlags::BOLD)`.
    #[must_use]
    pub fn bold(self) -> Self {
        self.attr(StyleFlags::BOLD)
    }

    /// Shorthand for `attr(StyleFlags::DIM)`.
    #[must_use]
    pub fn dim(self) -> Self {
        self.attr(StyleFlags::DIM)
    }

    /// Shorthand for `attr(StyleFlags::UNDERLINE)`.
    #[must_use]
    pub fn underline(self) -> Self {
        self.attr(StyleFlags::UNDERLINE)
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Apply the set fields to a cell, leaving the rest untouched.
    pub fn apply_to(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = fg;
        }
        if let Some(bg) = self.bg {
            cell.bg = bg;
        }
        if let Some(attrs) = self.attrs {
            cell.attrs = attrs;
        }
    }
}
