//! Session orchestrator: weekday iteration, per-entry batches, tally.

use chrono::{Datelike, NaiveDate, Weekday};
use std::thread;
use std::time::Duration;

use crate::config::ScraperConfig;
use crate::pipeline::download_media_files;
use crate::session::{JournalEntry, PageSession};
use crate::tally::SessionTally;

/// Entry-title sentinel used when the portal shows no heading.
pub const NO_TITLE: &str = "no_entry_title";

/// Courtesy throttle between day views so the portal is not hammered.
const INTER_DAY_DELAY: Duration = Duration::from_secs(1);

pub struct Scraper {
    config: ScraperConfig,
    inter_day_delay: Duration,
}

impl Scraper {
    pub fn new(config: ScraperConfig) -> Self {
        Self {
            config,
            inter_day_delay: INTER_DAY_DELAY,
        }
    }

    /// Overrides the courtesy delay between days (tests run with zero).
    pub fn with_inter_day_delay(mut self, delay: Duration) -> Self {
        self.inter_day_delay = delay;
        self
    }

    /// Runs the scrape over the configured weekday range.
    ///
    /// A rejected or failed login aborts the run; whatever was tallied so far
    /// is still returned so the caller can emit the summary. A day whose
    /// entries cannot be read is skipped, not fatal.
    pub fn run<S: PageSession>(&self, session: &mut S) -> SessionTally {
        let mut tally = SessionTally::default();

        tracing::info!(
            "Signing into {} with email {}",
            self.config.base_url,
            self.config.email
        );
        match session.login() {
            Ok(true) => {}
            Ok(false) => {
                tracing::error!("Login failed. Aborting.");
                return tally;
            }
            Err(e) => {
                tracing::error!("Error during login: {:#}", e);
                return tally;
            }
        }

        let days = work_week_days(self.config.day_from, self.config.day_to);
        for day in days {
            tally.days_checked += 1;

            let entries = match session.entries_for_day(day) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Failed to read day {}: {:#}. Skipping.", day, e);
                    continue;
                }
            };

            tracing::info!("Found {} journal entries in the {} day view", entries.len(), day);
            tally.journal_entries += entries.len() as u64;
            for entry in &entries {
                self.process_entry(day, entry, &mut tally);
            }

            thread::sleep(self.inter_day_delay);
        }

        tally
    }

    fn process_entry(&self, day: NaiveDate, entry: &JournalEntry, tally: &mut SessionTally) {
        let title = entry.title.as_deref().unwrap_or(NO_TITLE);

        if !entry.image_urls.is_empty() {
            tally.gallery_images += entry.image_urls.len() as u64;
            tally.absorb(download_media_files(
                day,
                title,
                &entry.image_urls,
                &self.config.output_dir,
            ));
        }

        if !entry.attachment_urls.is_empty() {
            tally.attachments += entry.attachment_urls.len() as u64;
            tally.absorb(download_media_files(
                day,
                title,
                &entry.attachment_urls,
                &self.config.output_dir,
            ));
        }
    }
}

/// Weekdays (Mon-Fri) of the inclusive range, oldest first.
pub fn work_week_days(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = from;
    while day <= to {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(day);
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    days
}
