#![forbid(unsafe_code)]

//! One-shot visibility trigger.
//!
//! A reveal should not start until the user can actually see it. The gate
//! observes the widget area against the viewport each frame; the first time
//! they overlap it fires and stays fired; later scrolling off-screen does
//! not reset a run already under way.

use decipher_core::geometry::Rect;

/// Fire-once trigger for "the element became visible".
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityGate {
    fired: bool,
}

impl VisibilityGate {
    /// A gate that has not fired yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the widget area against the viewport.
    ///
    /// Returns `true` exactly once: on the first call where the two
    /// rectangles overlap. After that the gate is latched and `observe`
    /// returns `false` without looking at the geometry again.
    pub fn observe(&mut self, area: Rect, viewport: Rect) -> bool {
        if self.fired {
            return false;
        }
        if area.intersects(&viewport) {
            self.fired = true;
            return true;
        }
        false
    }

    /// Whether the gate has fired.
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
