#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use tootstats::config::FetchConfig;
use tootstats::models::{Mention, Tag};
use tootstats::{Account, AppError, Page, Result, Status, StatusSource};

pub const SELF_ID: &str = "1";

/// Serves canned pages in call order and canned threads by status id.
#[derive(Default)]
pub struct ScriptedSource {
    pages: Vec<Page>,
    threads: HashMap<String, Vec<Status>>,
    failing_threads: Vec<String>,
    page_cursors: Mutex<Vec<Option<String>>>,
    thread_calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn with_thread(mut self, status_id: &str, descendants: Vec<Status>) -> Self {
        self.threads.insert(status_id.to_string(), descendants);
        self
    }

    pub fn failing_thread(mut self, status_id: &str) -> Self {
        self.failing_threads.push(status_id.to_string());
        self
    }

    pub fn page_calls(&self) -> usize {
        self.page_cursors.lock().unwrap().len()
    }

    pub fn cursors_seen(&self) -> Vec<Option<String>> {
        self.page_cursors.lock().unwrap().clone()
    }

    pub fn thread_calls(&self) -> Vec<String> {
        self.thread_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusSource for ScriptedSource {
    async fn fetch_page(
        &self,
        _account_id: &str,
        cursor: Option<&str>,
        _limit: usize,
    ) -> Result<Page> {
        let mut cursors = self.page_cursors.lock().unwrap();
        let index = cursors.len();
        cursors.push(cursor.map(str::to_string));
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| AppError::api(500, format!("no scripted page {}", index)))
    }

    async fn fetch_thread(&self, status_id: &str) -> Result<Vec<Status>> {
        self.thread_calls.lock().unwrap().push(status_id.to_string());
        if self.failing_threads.iter().any(|id| id == status_id) {
            return Err(AppError::api(503, "thread unavailable"));
        }
        Ok(self.threads.get(status_id).cloned().unwrap_or_default())
    }
}

pub fn fetch_config() -> FetchConfig {
    FetchConfig {
        page_delay_ms: 0,
        ..FetchConfig::default()
    }
}

pub fn account(id: &str, acct: &str) -> Account {
    Account {
        id: id.to_string(),
        acct: acct.to_string(),
        username: acct.to_string(),
        created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        followers_count: 120,
        following_count: 80,
        statuses_count: 0,
    }
}

pub fn me() -> Account {
    account(SELF_ID, "me")
}

pub fn page(statuses: Vec<Status>, next_cursor: Option<&str>) -> Page {
    Page {
        statuses,
        next_cursor: next_cursor.map(str::to_string),
    }
}

pub fn original(id: &str, text: &str, likes: u64, boosts: u64) -> Status {
    Status {
        id: id.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        in_reply_to_id: None,
        content: format!("<p>{}</p>", text),
        url: Some(format!("https://example.social/@me/{}", id)),
        account: me(),
        reblog: None,
        mentions: Vec::new(),
        tags: Vec::new(),
        favourites_count: likes,
        reblogs_count: boosts,
    }
}

pub fn reply(id: &str, parent: &str, text: &str, likes: u64) -> Status {
    let mut status = original(id, text, likes, 0);
    status.in_reply_to_id = Some(parent.to_string());
    status
}

pub fn boost(id: &str, author: &str) -> Status {
    let mut boosted = original(&format!("{}-orig", id), "someone else's words", 9, 9);
    boosted.account = account(&format!("{}-author", author), author);
    let mut status = original(id, "", 0, 0);
    status.reblog = Some(Box::new(boosted));
    status
}

pub fn response(id: &str, parent: &str, author_id: &str, author: &str) -> Status {
    let mut status = reply(id, parent, "nice", 0);
    status.account = account(author_id, author);
    status
}

pub fn tagged(mut status: Status, tags: &[&str]) -> Status {
    status.tags = tags
        .iter()
        .map(|name| Tag {
            name: name.to_string(),
        })
        .collect();
    status
}

pub fn mentioning(mut status: Status, accts: &[&str]) -> Status {
    status.mentions = accts
        .iter()
        .map(|acct| Mention {
            acct: acct.to_string(),
        })
        .collect();
    status
}
