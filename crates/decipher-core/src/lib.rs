#![forbid(unsafe_code)]

//! Animation core for decipher.
//!
//! This crate holds everything algorithmic about a scramble-reveal run and
//! nothing about how it gets drawn or scheduled:
//!
//! - [`geometry`]: cell-grid rectangles for layout bounds and visibility tests
//! - [`charset`]: the pool of substitute glyphs and deterministic sampling
//! - [`cancel`]: the cancellation flag captured by frame callbacks
//! - [`reveal`]: the [`RevealRun`] state machine itself
//!
//! A run starts fully scrambled and reveals the target string left-to-right
//! at one cadence while re-randomizing the remainder at another, until the
//! whole string is shown. Time enters only through [`RevealRun::tick`], so
//! the core is deterministic and host-agnostic: drive it from a terminal
//! event loop, a test, or a bench with identical results.
//!
//! # Example
//!
//! ```
//! use decipher_core::reveal::RevealRun;
//! use std::time::Duration;
//!
//! let mut run = RevealRun::new("HELLO").reveal_delay(Duration::from_millis(10));
//! run.tick(Duration::from_millis(25));
//! assert_eq!(run.revealed(), 2);
//! run.tick(Duration::from_millis(25));
//! assert_eq!(run.display(), "HELLO");
//! assert!(run.is_complete());
//! ```
//!
//! [`RevealRun`]: reveal::RevealRun

pub mod cancel;
pub mod charset;
pub mod geometry;
pub mod reveal;

pub use cancel::CancelToken;
pub use charset::{Charset, DEFAULT_CHARSET};
pub use geometry::Rect;
pub use reveal::RevealRun;
