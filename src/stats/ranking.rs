use std::cmp::Ordering;
use std::collections::HashMap;

use crate::stats::PostMetrics;

/// How much a boost is worth relative to a like in the combined score.
pub const BOOST_WEIGHT: u64 = 3;

/// Rows shown per table unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Likes,
    Boosts,
    Replies,
    Score,
}

impl SortKey {
    pub fn value(self, metrics: &PostMetrics) -> u64 {
        match self {
            SortKey::Likes => metrics.likes,
            SortKey::Boosts => metrics.boosts,
            SortKey::Replies => metrics.replies,
            SortKey::Score => score(metrics),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Likes => "Likes",
            SortKey::Boosts => "Boosts",
            SortKey::Replies => "Replies",
            SortKey::Score => "Score",
        }
    }
}

pub fn score(metrics: &PostMetrics) -> u64 {
    metrics
        .boosts
        .saturating_mul(BOOST_WEIGHT)
        .saturating_add(metrics.likes)
}

/// One row of a ranked view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub label: String,
    pub value: u64,
}

impl RankedEntry {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Rank keyed metrics by one criterion.
///
/// Entries scoring zero under `key` are dropped, the rest are ordered by value
/// descending (label ascending on ties) and cut to `top_n`.
pub fn rank_metrics<'a, I>(entries: I, key: SortKey, top_n: usize) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = (&'a String, &'a PostMetrics)>,
{
    rank_values(
        entries
            .into_iter()
            .map(|(label, metrics)| (label.as_str(), key.value(metrics))),
        top_n,
    )
}

/// Rank a plain counter map (mentions, boosts given, responses).
pub fn rank_counts(counts: &HashMap<String, u64>, top_n: usize) -> Vec<RankedEntry> {
    rank_values(
        counts.iter().map(|(label, value)| (label.as_str(), *value)),
        top_n,
    )
}

fn rank_values<'a, I>(values: I, top_n: usize) -> Vec<RankedEntry>
where
    I: Iterator<Item = (&'a str, u64)>,
{
    let mut ranked: Vec<RankedEntry> = values
        .filter(|(_, value)| *value > 0)
        .map(|(label, value)| RankedEntry::new(label, value))
        .collect();

    ranked.sort_by(compare_entries);
    ranked.truncate(top_n);
    ranked
}

fn compare_entries(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.value.cmp(&a.value).then_with(|| a.label.cmp(&b.label))
}
