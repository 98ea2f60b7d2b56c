//! Import progress reporting.

use crate::exercise_import::{ImportStats, RecordOutcome};

/// Trait for receiving import progress updates.
pub trait ImportProgress {
    /// Called after each record is processed. `stats` already includes it.
    fn on_record(
        &self,
        current: usize,
        total: usize,
        outcome: &RecordOutcome,
        stats: &ImportStats,
    );

    /// Called when a phase starts (e.g., "Importing 873 exercises").
    fn on_phase(&self, message: &str);

    /// Called when the import is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_record(&self, _: usize, _: usize, _: &RecordOutcome, _: &ImportStats) {}
    fn on_phase(&self, _message: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate every `every` imports.
pub struct LogProgress {
    pub every: u64,
}

impl Default for LogProgress {
    fn default() -> Self {
        Self { every: 50 }
    }
}

impl ImportProgress for LogProgress {
    fn on_record(
        &self,
        _current: usize,
        _total: usize,
        outcome: &RecordOutcome,
        stats: &ImportStats,
    ) {
        if stats.is_progress_point(outcome, self.every) {
            log::info!("  Imported {} exercises...", stats.imported);
        }
    }

    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
