//! Log, progress and cancellation hooks supplied by the caller
//!
//! The front end (CLI or GUI) owns presentation. The core only pushes
//! human-readable lines and percentages into a [`ConversionSink`] and polls it
//! for cancellation between categories.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Mutex;

/// Receiver for conversion log lines and progress updates
pub trait ConversionSink: Sync {
    /// Record one human-readable event
    fn log(&self, message: &str);

    /// Report progress of the current category, 0-100
    fn progress(&self, _percent: u8) {}

    /// Whether the run should keep going
    fn should_continue(&self) -> bool {
        true
    }
}

/// Sink that keeps every line in memory
///
/// Useful for embedding the converter behind a UI console and for tests.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Mutex<Vec<String>>,
    last_progress: AtomicU8,
    cancelled: AtomicBool,
}

impl BufferSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all logged lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Whether any logged line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }

    /// Last reported progress value
    pub fn last_progress(&self) -> u8 {
        self.last_progress.load(Ordering::Relaxed)
    }

    /// Request that the run stops at the next category boundary
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

impl ConversionSink for BufferSink {
    fn log(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(message.to_string());
        }
    }

    fn progress(&self, percent: u8) {
        self.last_progress.store(percent.min(100), Ordering::Relaxed);
    }

    fn should_continue(&self) -> bool {
        !self.cancelled.load(Ordering::Relaxed)
    }
}

/// Percentage of `done` out of `total`, clamped to 0-100
pub(crate) fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((done.min(total) * 100) / total) as u8
}
