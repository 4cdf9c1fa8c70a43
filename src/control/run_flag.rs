//! Start/stop flag shared between the signal listener and the publish loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Process-wide move/stop flag. Last write wins.
#[derive(Debug, Clone, Default)]
pub struct RunFlag {
    inner: Arc<AtomicBool>,
}

impl RunFlag {
    pub fn new() -> Self {
        RunFlag::default()
    }

    pub fn set(&self, running: bool) {
        self.inner.store(running, Ordering::Release);
    }

    pub fn is_set(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }
}
