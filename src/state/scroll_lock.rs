//! Page scroll lock held while a modal is open

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag suspending view navigation and scrolling
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    locked: Arc<AtomicBool>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }

    /// Lock scrolling until the returned guard is dropped
    pub fn acquire(&self) -> ScrollLockGuard {
        if self.locked.swap(true, Ordering::AcqRel) {
            tracing::warn!("scroll lock acquired while already held");
        } else {
            tracing::debug!("scroll lock acquired");
        }
        ScrollLockGuard {
            locked: Arc::clone(&self.locked),
        }
    }
}

/// Releases the scroll lock when dropped
#[derive(Debug)]
#[must_use = "dropping the guard releases the scroll lock immediately"]
pub struct ScrollLockGuard {
    locked: Arc<AtomicBool>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.locked.store(false, Ordering::Release);
        tracing::debug!("scroll lock released");
    }
}
