#![forbid(unsafe_code)]

//! Cancellation flag for in-flight frame callbacks.
//!
//! A [`CancelToken`] is created alongside a run and a clone of it is captured
//! by whatever schedules frames. Setting the flag guarantees the very next
//! (or currently in-flight) callback is a no-op: callbacks check the token
//! before touching any run state. There is nothing to time out (the reveal
//! loop is bounded by the target length), so the token is a plain latch:
//! once cancelled, always cancelled.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A cloneable cancellation flag shared between a run's owner and its
/// scheduled callbacks.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag. Idempotent; never blocks.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether the flag has been set on any clone of this token.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
