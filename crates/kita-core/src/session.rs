//! Boundary to the portal: the orchestrator only ever needs login plus the
//! per-day journal entries, so that is the whole interface.

use chrono::NaiveDate;

/// One dated activity record with its media references, in page order.
#[derive(Debug, Clone, Default)]
pub struct JournalEntry {
    /// Entry heading as shown in the portal; `None` when the entry has none.
    pub title: Option<String>,
    pub image_urls: Vec<String>,
    pub attachment_urls: Vec<String>,
}

/// Narrow interface over the portal page session.
///
/// Implementations authenticate once, then resolve journal entries per
/// calendar day. Keeping the surface this small keeps the pipeline and
/// orchestrator testable without any portal access.
pub trait PageSession {
    /// Authenticates against the portal. `Ok(false)` means the portal
    /// rejected the credentials; errors are transport-level failures.
    fn login(&mut self) -> anyhow::Result<bool>;

    /// Returns the journal entries visible on `day`'s day view.
    fn entries_for_day(&mut self, day: NaiveDate) -> anyhow::Result<Vec<JournalEntry>>;
}
