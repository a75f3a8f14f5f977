//! Scoped timing of request phases.

use std::time::{Duration, Instant};

/// Logs the time spent between its creation and drop at debug level.
#[derive(Debug)]
pub struct Stopwatch {
    label: String,
    started: Instant,
}

impl Stopwatch {
    pub fn start<S: Into<String>>(label: S) -> Self {
        let label = label.into();
        log::trace!("Stopwatch started: {label}");
        Self {
            label,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        log::debug!("{} took {:?}", self.label, self.elapsed());
    }
}
