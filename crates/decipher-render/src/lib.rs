#![forbid(unsafe_code)]

//! Minimal render surface for decipher.
//!
//! A [`Buffer`] is a row-major grid of [`Cell`]s; widgets draw into it and
//! the host presents it however it likes (this crate performs no terminal
//! I/O). Styling is a flat [`Style`] of optional foreground, background,
//! and attribute flags. There is deliberately no theme or stylesheet
//! layer on top.
//!
//! [`Buffer`]: buffer::Buffer
//! [`Cell`]: cell::Cell
//! [`Style`]: style::Style

pub mod buffer;
pub mod cell;
pub mod style;

pub use buffer::Buffer;
pub use cell::{Cell, PackedRgba, StyleFlags};
pub use style::Style;
