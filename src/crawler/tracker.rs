//! Completion tracking for recursively spawned crawl tasks
//!
//! The crawl is finished exactly when the number of outstanding tasks
//! returns to zero. Registration happens synchronously before each spawn
//! and completion is signalled unconditionally when a task ends, so the
//! count never transiently reads zero while a spawn is pending.

use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Count of outstanding (spawned but not yet finished) crawl tasks
#[derive(Debug, Default)]
pub struct CompletionTracker {
    outstanding: AtomicUsize,
    zero: Notify,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one pending task
    ///
    /// Must be called before the task is spawned, in the spawning task.
    pub fn register(&self) {
        self.outstanding.fetch_add(1, Ordering::AcqRel);
    }

    /// Marks one task finished, waking waiters when the count hits zero
    pub fn finish(&self) {
        if self.outstanding.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.zero.notify_waiters();
        }
    }

    /// Current number of outstanding tasks
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }

    /// Waits until the outstanding count reaches zero
    ///
    /// Returns immediately if nothing is outstanding. The notified-future is
    /// registered before the count is re-checked, so a `finish` racing with
    /// the check cannot be missed.
    pub async fn wait(&self) {
        loop {
            let notified = self.zero.notified();
            if self.outstanding.load(Ordering::Acquire) == 0 {
                return;
            }
            notified.await;
        }
    }
}
