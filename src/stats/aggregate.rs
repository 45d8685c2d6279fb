use std::collections::HashMap;

use tracing::debug;

use crate::content::normalize_content;
use crate::models::{Account, Status};

/// Engagement accumulated for one key: a post's text or a hashtag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostMetrics {
    pub likes: u64,
    pub boosts: u64,
    pub replies: u64,
}

impl PostMetrics {
    pub fn new(likes: u64, boosts: u64, replies: u64) -> Self {
        Self {
            likes,
            boosts,
            replies,
        }
    }

    /// Field-by-field sum, used for tag tallies.
    pub fn accumulate(&mut self, other: PostMetrics) {
        self.likes = self.likes.saturating_add(other.likes);
        self.boosts = self.boosts.saturating_add(other.boosts);
        self.replies = self.replies.saturating_add(other.replies);
    }
}

/// Everything learned about the account during one run.
#[derive(Debug, Clone, Default)]
pub struct StatsAggregate {
    pub days_active: u64,
    pub followers: u64,
    pub following: u64,
    pub original_posts: HashMap<String, PostMetrics>,
    pub replies: HashMap<String, PostMetrics>,
    pub tags: HashMap<String, PostMetrics>,
    pub mentions: HashMap<String, u64>,
    pub boosts_given: HashMap<String, u64>,
    pub responses: HashMap<String, u64>,
}

impl StatsAggregate {
    pub fn new(days_active: u64, followers: u64, following: u64) -> Self {
        Self {
            days_active,
            followers,
            following,
            ..Self::default()
        }
    }

    /// Snapshot the account's counters at the start of a run.
    pub fn for_account(account: &Account, now: chrono::DateTime<chrono::Utc>) -> Self {
        Self::new(
            account.days_active(now),
            account.followers_count,
            account.following_count,
        )
    }

    /// Fold one status into the aggregate.
    ///
    /// `thread` holds the descendants of `status` and is only consulted for
    /// originals; `self_id` is the tracked account, whose own follow-ups in a
    /// thread are not counted as responses.
    pub fn record(&mut self, status: &Status, thread: Option<&[Status]>, self_id: &str) {
        for mention in &status.mentions {
            *self.mentions.entry(mention.acct.clone()).or_insert(0) += 1;
        }

        if let Some(original) = status.reblog.as_deref() {
            *self
                .boosts_given
                .entry(original.account.acct.clone())
                .or_insert(0) += 1;
            return;
        }

        let mut reply_count = 0u64;
        if !status.is_reply() {
            for descendant in thread.unwrap_or_default() {
                if descendant.account.id == self_id {
                    continue;
                }
                reply_count += 1;
                *self
                    .responses
                    .entry(descendant.account.acct.clone())
                    .or_insert(0) += 1;
            }

            let metrics = PostMetrics::new(status.favourites_count, status.reblogs_count, reply_count);
            for tag in &status.tags {
                self.tags
                    .entry(tag.name.to_lowercase())
                    .or_default()
                    .accumulate(metrics);
            }
        }

        let key = normalize_content(&status.content);
        let metrics = PostMetrics::new(status.favourites_count, status.reblogs_count, reply_count);
        let target = if status.is_reply() {
            &mut self.replies
        } else {
            &mut self.original_posts
        };
        if let Some(previous) = target.insert(key, metrics) {
            debug!(status_id = %status.id, ?previous, "post text collided, keeping latest metrics");
        }
    }

    pub fn original_count(&self) -> usize {
        self.original_posts.len()
    }

    /// Totals over all originals.
    pub fn original_totals(&self) -> PostMetrics {
        self.original_posts
            .values()
            .fold(PostMetrics::default(), |mut total, metrics| {
                total.accumulate(*metrics);
                total
            })
    }
}
