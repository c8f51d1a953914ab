#![forbid(unsafe_code)]

//! Host plumbing for decipher runs.
//!
//! The animation core is driven, not self-driving: some host hands it frame
//! ticks. This crate provides the pieces between the two:
//!
//! - [`FrameSource`]: the host's "next frame" primitive
//! - [`VisibilityGate`]: fire-once trigger for viewport entry
//! - [`RevealSession`]: one run's lifecycle (waiting for visibility,
//!   running, complete, cancelled) with text-keyed identity
//! - [`drive`]: a headless loop for tests and non-interactive output
//!
//! # Example
//!
//! ```
//! use decipher_core::geometry::Rect;
//! use decipher_runtime::{FixedFrames, Phase, RevealSession, drive};
//! use std::time::Duration;
//!
//! let mut session = RevealSession::new("hello")
//!     .reveal_delay(Duration::from_millis(10));
//! let mut frames = FixedFrames::limited(Duration::from_millis(16), 100);
//! let area = Rect::from_size(5, 1);
//!
//! let phase = drive(&mut session, &mut frames, area, Rect::from_size(80, 24));
//! assert_eq!(phase, Phase::Complete);
//! assert_eq!(session.run().display(), "hello");
//! ```
//!
//! [`FrameSource`]: frames::FrameSource
//! [`VisibilityGate`]: visibility::VisibilityGate
//! [`RevealSession`]: session::RevealSession
//! [`drive`]: session::drive

pub mod frames;
pub mod session;
pub mod visibility;

pub use frames::{FixedFrames, FrameSource};
pub use session::{Phase, RevealSession, drive};
pub use visibility::VisibilityGate;
