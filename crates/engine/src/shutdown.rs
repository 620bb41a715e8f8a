//! Process-wide termination signal shared by every actor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Monotonic cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    flag: Arc<AtomicBool>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request termination. Returns `true` only for the call that flipped the flag.
    pub fn trigger(&self) -> bool {
        !self.flag.swap(true, Ordering::SeqCst)
    }

    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
