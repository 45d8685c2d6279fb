//! The remote side of a run: anything that can page through an account's
//! statuses and look up thread context.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Status;

/// One page of an account's timeline.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub statuses: Vec<Status>,
    /// Cursor for the following page. `None` is the server's nominal
    /// "no more pages" signal.
    pub next_cursor: Option<String>,
}

#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch up to `limit` statuses older than `cursor` (newest first when
    /// `cursor` is `None`).
    async fn fetch_page(&self, account_id: &str, cursor: Option<&str>, limit: usize)
        -> Result<Page>;

    /// Fetch the descendants of `status_id`.
    async fn fetch_thread(&self, status_id: &str) -> Result<Vec<Status>>;
}
