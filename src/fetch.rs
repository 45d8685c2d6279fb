//! Cursor-driven paging through an account's timeline.
//!
//! Some servers keep handing out a next cursor long after the timeline is
//! exhausted, so a page with no statuses ends the walk as well as a missing
//! cursor. `max_pages` bounds the walk for anything else.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::error::Result;
use crate::models::Status;
use crate::source::StatusSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    CursorExhausted,
    EmptyPage,
    PageLimit,
}

pub struct Paginator<'a, S: StatusSource + ?Sized> {
    source: &'a S,
    account_id: &'a str,
    page_size: usize,
    page_delay: Duration,
    max_pages: usize,
    cursor: Option<String>,
    pages_fetched: usize,
    stopped: Option<StopReason>,
}

impl<'a, S: StatusSource + ?Sized> Paginator<'a, S> {
    pub fn new(source: &'a S, account_id: &'a str, config: &FetchConfig) -> Self {
        Self {
            source,
            account_id,
            page_size: config.page_size,
            page_delay: Duration::from_millis(config.page_delay_ms),
            max_pages: config.max_pages,
            cursor: None,
            pages_fetched: 0,
            stopped: None,
        }
    }

    /// Fetch the next non-empty page, or `None` once the timeline is done.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Status>>> {
        if self.stopped.is_some() {
            return Ok(None);
        }
        if self.pages_fetched >= self.max_pages {
            warn!(pages = self.pages_fetched, "page limit reached, stopping early");
            self.stopped = Some(StopReason::PageLimit);
            return Ok(None);
        }

        if self.pages_fetched > 0 && !self.page_delay.is_zero() {
            tokio::time::sleep(self.page_delay).await;
        }

        let page = self
            .source
            .fetch_page(self.account_id, self.cursor.as_deref(), self.page_size)
            .await?;
        self.pages_fetched += 1;
        debug!(
            page = self.pages_fetched,
            statuses = page.statuses.len(),
            next = ?page.next_cursor,
            "fetched page"
        );

        if page.statuses.is_empty() {
            self.stopped = Some(StopReason::EmptyPage);
            return Ok(None);
        }

        match page.next_cursor.filter(|cursor| !cursor.is_empty()) {
            Some(cursor) => self.cursor = Some(cursor),
            None => self.stopped = Some(StopReason::CursorExhausted),
        }

        Ok(Some(page.statuses))
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stopped
    }
}
