use crate::error::Result;
use crate::models::Status;
use crate::source::StatusSource;
use crate::stats::StatsAggregate;

/// Applies the classification rules to statuses of one tracked account,
/// fetching thread context where a status needs it.
pub struct Classifier<'a, S: StatusSource + ?Sized> {
    source: &'a S,
    self_id: &'a str,
}

impl<'a, S: StatusSource + ?Sized> Classifier<'a, S> {
    pub fn new(source: &'a S, self_id: &'a str) -> Self {
        Self { source, self_id }
    }

    /// Descendants of `status` if it opened a thread; boosts and replies get
    /// `None` without touching the network.
    pub async fn thread_for(&self, status: &Status) -> Result<Option<Vec<Status>>> {
        if !status.is_original() {
            return Ok(None);
        }
        let descendants = self.source.fetch_thread(&status.id).await?;
        tracing::debug!(status_id = %status.id, descendants = descendants.len(), "fetched thread");
        Ok(Some(descendants))
    }

    pub async fn classify(&self, status: &Status, stats: &mut StatsAggregate) -> Result<()> {
        let thread = self.thread_for(status).await?;
        stats.record(status, thread.as_deref(), self.self_id);
        Ok(())
    }

    pub fn self_id(&self) -> &str {
        self.self_id
    }
}
