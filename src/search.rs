use chrono::{DateTime, Utc};
use indicatif::ProgressBar;

use crate::advance_progress;
use crate::config::FetchConfig;
use crate::content::normalize_content;
use crate::error::Result;
use crate::fetch::Paginator;
use crate::source::StatusSource;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub url: Option<String>,
}

/// Scan the whole timeline for statuses whose text contains `token`,
/// ignoring case. Each hit is handed to `on_hit` as soon as it is seen.
///
/// Returns the number of hits.
pub async fn search_statuses<S, F>(
    source: &S,
    account_id: &str,
    fetch: &FetchConfig,
    token: &str,
    progress: &ProgressBar,
    mut on_hit: F,
) -> Result<usize>
where
    S: StatusSource + ?Sized,
    F: FnMut(SearchHit),
{
    let needle = token.to_lowercase();
    let mut pages = Paginator::new(source, account_id, fetch);
    let mut hits = 0;

    while let Some(statuses) = pages.next_page().await? {
        for status in &statuses {
            let text = normalize_content(&status.content);
            if text.to_lowercase().contains(&needle) {
                hits += 1;
                on_hit(SearchHit {
                    text,
                    created_at: status.created_at,
                    url: status.url.clone(),
                });
            }
            advance_progress(progress);
        }
    }

    Ok(hits)
}
