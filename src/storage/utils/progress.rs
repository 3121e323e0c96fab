use std::io::{self, Write};

/// Receives progress updates from long-running operations.
pub trait ProgressReporter {
    /// Called after each completed unit with the running count.
    fn advance(&self, done: u64);

    /// Called once after the last unit.
    fn finish(&self) {}
}

/// A reporter that discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl ProgressReporter for NullProgress {
    fn advance(&self, _done: u64) {}
}

/// A minimal progress reporter that prints percentage updates to stdout.
pub struct ConsoleProgressReporter {
    label: String,
    total: Option<u64>,
    step: u64,
}

impl ConsoleProgressReporter {
    pub fn new(label: impl Into<String>, total: Option<u64>, step: u64) -> Self {
        Self {
            label: label.into(),
            total,
            step: step.max(1),
        }
    }

    /// Print progress if a reporting threshold has been reached.
    pub fn maybe_report(&self, done: u64) {
        if let Some(total) = self.total {
            if total == 0 {
                return;
            }
            if done.is_multiple_of(self.step) || done == total {
                let progress = ((done as f64 / total as f64) * 100.0) as u32;
                print!("\r {}: {}%", self.label, progress);
                let _ = io::stdout().flush();
            }
        }
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn advance(&self, done: u64) {
        self.maybe_report(done);
    }

    fn finish(&self) {
        if self.total.is_some_and(|total| total > 0) {
            println!();
        }
    }
}
