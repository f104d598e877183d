// src/progress.rs

//! Progress reporting for sequential batch operations
//!
//! Every stage of the pipeline processes its units one at a time, so
//! reporting is a total announced up front followed by a monotonically
//! increasing 1-based completed count. The `ProgressReporter` trait keeps
//! the core free of any terminal dependency; the CLI layer supplies an
//! indicatif-backed implementation, non-interactive callers get
//! `LogProgress` or `SilentProgress`.

use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Receiver for sequential progress updates
pub trait ProgressReporter: Send + Sync {
    /// Announce the total number of units before the first one starts
    fn begin(&self, total: u64);

    /// Report a 1-based completed count; called once per finished unit
    fn advance(&self, completed: u64);

    /// Update the status line for the unit currently in flight
    fn message(&self, message: &str);

    /// All units finished (or the stage aborted)
    fn finish(&self, message: &str);
}

/// No-op reporter for scripted and quiet usage
#[derive(Debug, Default)]
pub struct SilentProgress;

impl SilentProgress {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for SilentProgress {
    fn begin(&self, _total: u64) {}
    fn advance(&self, _completed: u64) {}
    fn message(&self, _message: &str) {}
    fn finish(&self, _message: &str) {}
}

/// Reporter that logs counts through tracing at info level
#[derive(Debug)]
pub struct LogProgress {
    name: String,
    total: AtomicU64,
}

impl LogProgress {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total: AtomicU64::new(0),
        }
    }
}

impl ProgressReporter for LogProgress {
    fn begin(&self, total: u64) {
        self.total.store(total, Ordering::Relaxed);
        info!("{}: starting {} units", self.name, total);
    }

    fn advance(&self, completed: u64) {
        let total = self.total.load(Ordering::Relaxed);
        info!("{}: {}/{}", self.name, completed, total);
    }

    fn message(&self, message: &str) {
        info!("{}: {}", self.name, message);
    }

    fn finish(&self, message: &str) {
        info!("{}: {}", self.name, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_progress_is_noop() {
        let progress = SilentProgress::new();
        progress.begin(10);
        progress.advance(1);
        progress.message("working");
        progress.finish("done");
    }

    #[test]
    fn test_log_progress_tracks_total() {
        let progress = LogProgress::new("retrieve");
        progress.begin(3);
        assert_eq!(progress.total.load(Ordering::Relaxed), 3);
        progress.advance(1);
        progress.advance(2);
        progress.advance(3);
        progress.finish("complete");
    }
}
