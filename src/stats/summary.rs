use crate::stats::StatsAggregate;

/// Derived per-account figures shown above the tables.
///
/// Ratios are `None` when their denominator is zero (a brand-new account, no
/// replies observed, no originals at all).
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub days_active: u64,
    pub total_originals: u64,
    pub originals_per_day: Option<f64>,
    pub originals_per_reply: Option<f64>,
    pub followers_per_day: Option<f64>,
    pub following_per_day: Option<f64>,
    pub total_likes: u64,
    pub likes_per_toot: Option<f64>,
    pub total_boosts: u64,
    pub boosts_per_toot: Option<f64>,
    pub total_replies: u64,
    pub replies_per_toot: Option<f64>,
}

impl AccountSummary {
    pub fn from_aggregate(stats: &StatsAggregate) -> Self {
        let totals = stats.original_totals();
        let originals = stats.original_posts.len() as u64;
        let replies = stats.replies.len() as u64;

        Self {
            days_active: stats.days_active,
            total_originals: originals,
            originals_per_day: ratio(originals, stats.days_active),
            originals_per_reply: ratio(originals, replies),
            followers_per_day: ratio(stats.followers, stats.days_active),
            following_per_day: ratio(stats.following, stats.days_active),
            total_likes: totals.likes,
            likes_per_toot: ratio(totals.likes, originals),
            total_boosts: totals.boosts,
            boosts_per_toot: ratio(totals.boosts, originals),
            total_replies: totals.replies,
            replies_per_toot: ratio(totals.replies, originals),
        }
    }
}

pub fn ratio(numerator: u64, denominator: u64) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}
