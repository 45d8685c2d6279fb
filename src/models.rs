use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single post as returned by the statuses and context endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub in_reply_to_id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub url: Option<String>,
    pub account: Account,
    #[serde(default)]
    pub reblog: Option<Box<Status>>,
    #[serde(default)]
    pub mentions: Vec<Mention>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub favourites_count: u64,
    #[serde(default)]
    pub reblogs_count: u64,
}

impl Status {
    pub fn is_boost(&self) -> bool {
        self.reblog.is_some()
    }

    pub fn is_reply(&self) -> bool {
        self.in_reply_to_id.is_some()
    }

    /// Neither a boost nor a reply: the post opened its own thread.
    pub fn is_original(&self) -> bool {
        !self.is_boost() && !self.is_reply()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: String,
    pub acct: String,
    #[serde(default)]
    pub username: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub statuses_count: u64,
}

impl Account {
    /// Whole days elapsed between account creation and `now`, never negative.
    pub fn days_active(&self, now: DateTime<Utc>) -> u64 {
        (now - self.created_at).num_days().max(0) as u64
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Mention {
    pub acct: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
}

/// Thread context around a status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Context {
    #[serde(default)]
    pub ancestors: Vec<Status>,
    #[serde(default)]
    pub descendants: Vec<Status>,
}
