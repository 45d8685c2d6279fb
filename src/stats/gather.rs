use chrono::Utc;
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use tracing::debug;

use crate::advance_progress;
use crate::config::FetchConfig;
use crate::error::Result;
use crate::fetch::Paginator;
use crate::models::Account;
use crate::source::StatusSource;
use crate::stats::{Classifier, StatsAggregate};

/// Walk the account's timeline and fold every status into a fresh aggregate.
///
/// Thread lookups for a page run up to `fetch.thread_concurrency` at a time
/// but are applied strictly in timeline order, so the result matches a
/// sequential pass. `max_toots` (0 = unlimited) stops the walk once that many
/// originals are recorded.
pub async fn gather_stats<S>(
    source: &S,
    account: &Account,
    fetch: &FetchConfig,
    max_toots: usize,
    progress: &ProgressBar,
) -> Result<StatsAggregate>
where
    S: StatusSource + ?Sized,
{
    let mut stats = StatsAggregate::for_account(account, Utc::now());
    let classifier = Classifier::new(source, &account.id);
    let classifier = &classifier;
    let mut pages = Paginator::new(source, &account.id, fetch);
    let concurrency = fetch.thread_concurrency.max(1);

    'pages: while let Some(statuses) = pages.next_page().await? {
        let mut lookups = stream::iter(statuses.iter())
            .map(|status| async move {
                let thread = classifier.thread_for(status).await?;
                Ok::<_, crate::error::AppError>((status, thread))
            })
            .buffered(concurrency);

        while let Some(lookup) = lookups.next().await {
            let (status, thread) = lookup?;
            stats.record(status, thread.as_deref(), classifier.self_id());
            advance_progress(progress);

            if budget_reached(&stats, max_toots) {
                debug!(originals = stats.original_count(), "recent toot budget reached");
                break 'pages;
            }
        }
    }

    debug!(
        pages = pages.pages_fetched(),
        stop = ?pages.stop_reason(),
        originals = stats.original_count(),
        replies = stats.replies.len(),
        "finished gathering"
    );
    Ok(stats)
}

fn budget_reached(stats: &StatsAggregate, max_toots: usize) -> bool {
    max_toots > 0 && stats.original_count() >= max_toots
}
