#![forbid(unsafe_code)]

//! Run lifecycle: visibility-gated start, per-frame advancement,
//! cancellation, and text-keyed identity.
//!
//! A [`RevealSession`] owns exactly one [`RevealRun`] per target text.
//! Changing the text is not a mutation of the in-flight run: the old run's
//! token is cancelled first (so a callback still holding it becomes a
//! no-op), then a brand-new run, token, and visibility gate are created.
//! No run ever observes a text value different from the one it started
//! with.
//!
//! Time spent before the widget becomes visible is discarded; the run clock
//! starts at the first visible frame.

use std::time::Duration;

use decipher_core::cancel::CancelToken;
use decipher_core::charset::Charset;
use decipher_core::geometry::Rect;
use decipher_core::reveal::{DEFAULT_FLIP_DELAY, DEFAULT_REVEAL_DELAY, RevealRun};

use crate::frames::FrameSource;
use crate::visibility::VisibilityGate;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not yet visible; the run clock has not started.
    Waiting,
    /// Visible and animating.
    Running,
    /// Every character revealed; terminal.
    Complete,
    /// Torn down before completion; terminal.
    Cancelled,
}

/// Tunables shared by every run a session builds.
#[derive(Debug, Clone)]
struct RunConfig {
    reveal_delay: Duration,
    flip_delay: Duration,
    charset: Charset,
    seed: u64,
}

impl RunConfig {
    fn build(&self, text: &str) -> RevealRun {
        RevealRun::new(text)
            .reveal_delay(self.reveal_delay)
            .flip_delay(self.flip_delay)
            .charset(self.charset.clone())
            .seed(self.seed)
    }
}

/// One scramble-reveal component instance.
#[derive(Debug, Clone)]
pub struct RevealSession {
    config: RunConfig,
    run: RevealRun,
    token: CancelToken,
    gate: VisibilityGate,
}

impl RevealSession {
    /// Create a session over `text` with default tunables.
    pub fn new(text: &str) -> Self {
        let config = RunConfig {
            reveal_delay: DEFAULT_REVEAL_DELAY,
            flip_delay: DEFAULT_FLIP_DELAY,
            charset: Charset::default(),
            seed: 0xD1CE,
        };
        let run = config.build(text);
        Self {
            config,
            run,
            token: CancelToken::new(),
            gate: VisibilityGate::new(),
        }
    }

    /// Set the minimum time per revealed character (builder).
    #[must_use]
    pub fn reveal_delay(mut self, delay: Duration) -> Self {
        self.config.reveal_delay = delay;
        self.run = self.config.build(self.run.text());
        self
    }

    /// Set the minimum time between tail re-randomizations (builder).
    #[must_use]
    pub fn flip_delay(mut self, delay: Duration) -> Self {
        self.config.flip_delay = delay;
        self.run = self.config.build(self.run.text());
        self
    }

    /// Set the substitute glyph pool (builder).
    #[must_use]
    pub fn charset(mut self, charset: impl Into<Charset>) -> Self {
        self.config.charset = charset.into();
        self.run = self.config.build(self.run.text());
        self
    }

    /// Set the sampling seed (builder).
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self.run = self.config.build(self.run.text());
        self
    }

    /// The target text of the current run.
    pub fn text(&self) -> &str {
        self.run.text()
    }

    /// The current run, for rendering.
    pub fn run(&self) -> &RevealRun {
        &self.run
    }

    /// Mutable access to the current run, as widget state.
    pub fn run_mut(&mut self) -> &mut RevealRun {
        &mut self.run
    }

    /// A clone of the cancellation token, for external teardown.
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        if self.token.is_cancelled() {
            Phase::Cancelled
        } else if self.run.is_complete() {
            Phase::Complete
        } else if !self.gate.has_fired() {
            Phase::Waiting
        } else {
            Phase::Running
        }
    }

    /// Whether another frame should be scheduled.
    ///
    /// `false` once the session is complete or cancelled; the loop is
    /// bounded, there are no timeouts.
    pub fn wants_frame(&self) -> bool {
        !self.token.is_cancelled() && !self.run.is_complete()
    }

    /// The frame callback. `area` is where the widget would draw and
    /// `viewport` is what is currently on screen; the run starts on the
    /// first frame where they overlap.
    ///
    /// The cancellation flag is checked before any state is touched, so a
    /// callback that fires after teardown mutates nothing.
    pub fn frame(&mut self, dt: Duration, area: Rect, viewport: Rect) -> Phase {
        if self.token.is_cancelled() {
            return Phase::Cancelled;
        }
        if self.run.is_complete() {
            return Phase::Complete;
        }
        if !self.gate.has_fired() {
            if self.gate.observe(area, viewport) {
                tracing::debug!(text = self.run.text(), "reveal started");
                // The arming frame starts the clock; its dt predates
                // visibility and is discarded.
                return Phase::Running;
            }
            return Phase::Waiting;
        }
        self.run.tick(dt);
        if self.run.is_complete() {
            tracing::debug!(text = self.run.text(), "reveal complete");
            Phase::Complete
        } else {
            Phase::Running
        }
    }

    /// Replace the target text.
    ///
    /// The same text is a no-op. A new text cancels the old run's token and
    /// rebuilds run, token, and gate from scratch; the new run waits for
    /// visibility again and starts fully scrambled.
    pub fn retarget(&mut self, text: &str) {
        if text == self.run.text() {
            return;
        }
        tracing::debug!(from = self.run.text(), to = text, "reveal retargeted");
        self.token.cancel();
        self.run = self.config.build(text);
        self.token = CancelToken::new();
        self.gate = VisibilityGate::new();
    }

    /// Tear the session down. Terminal; the session never animates again.
    pub fn cancel(&mut self) {
        if !self.token.is_cancelled() {
            tracing::debug!(text = self.run.text(), "reveal cancelled");
        }
        self.token.cancel();
    }
}

/// Drive a session to a terminal phase (or source exhaustion) headlessly.
///
/// Frames are requested from the source only while the session wants them,
/// so a source spy observes exactly the scheduling the session asked for.
pub fn drive<S: FrameSource>(
    session: &mut RevealSession,
    frames: &mut S,
    area: Rect,
    viewport: Rect,
) -> Phase {
    while session.wants_frame() {
        let Some(dt) = frames.next_frame() else {
            break;
        };
        session.frame(dt, area, viewport);
    }
    session.phase()
}
