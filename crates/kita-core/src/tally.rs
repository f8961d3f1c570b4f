//! Outcome accumulators: per-batch counts and the session-wide tally.
//!
//! Explicit values combined with `+`, threaded through the orchestrator;
//! nothing here is global.

use chrono::NaiveDate;
use std::ops::{Add, AddAssign};

/// Outcome of one pipeline batch (all images, or all attachments, of a single
/// journal entry). `succeeded + failed` always equals the batch's URL count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub succeeded: u64,
    pub failed: u64,
}

impl BatchOutcome {
    pub fn total(&self) -> u64 {
        self.succeeded + self.failed
    }
}

impl Add for BatchOutcome {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            succeeded: self.succeeded + rhs.succeeded,
            failed: self.failed + rhs.failed,
        }
    }
}

impl AddAssign for BatchOutcome {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Running counters for one scrape session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTally {
    pub days_checked: u64,
    pub journal_entries: u64,
    pub gallery_images: u64,
    pub attachments: u64,
    pub download_success: u64,
    pub download_failed: u64,
}

impl SessionTally {
    /// Folds a batch outcome into the download counters.
    pub fn absorb(&mut self, outcome: BatchOutcome) {
        self.download_success += outcome.succeeded;
        self.download_failed += outcome.failed;
    }

    /// Emits the end-of-run summary. Called even after an early abort.
    pub fn log_summary(&self, day_from: NaiveDate, day_to: NaiveDate) {
        tracing::info!("Summary:");
        tracing::info!(
            "Checked {} days between {} and {}",
            self.days_checked,
            day_from,
            day_to
        );
        tracing::info!("Visited {} journal entries", self.journal_entries);
        tracing::info!(
            "Found {} images in galleries and {} files in attachments",
            self.gallery_images,
            self.attachments
        );
        tracing::info!("Successfully downloaded {} files", self.download_success);
        if self.download_failed > 0 {
            tracing::warn!("Failed to download {} files", self.download_failed);
        }
    }
}
