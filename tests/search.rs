mod common;

use common::{fetch_config, original, page, reply, ScriptedSource, SELF_ID};
use indicatif::ProgressBar;
use tootstats::search::search_statuses;

#[tokio::test]
async fn finds_matches_across_all_pages_ignoring_case() {
    let source = ScriptedSource::new(vec![
        page(
            vec![
                original("3", "Rust is <b>great</b>", 0, 0),
                original("2", "nothing here", 0, 0),
            ],
            Some("2"),
        ),
        page(vec![reply("1", "0", "more rust please", 0)], None),
    ]);

    let mut hits = Vec::new();
    let count = search_statuses(
        &source,
        SELF_ID,
        &fetch_config(),
        "RUST",
        &ProgressBar::hidden(),
        |hit| hits.push(hit),
    )
    .await
    .expect("search succeeds");

    assert_eq!(count, 2);
    let texts: Vec<&str> = hits.iter().map(|hit| hit.text.as_str()).collect();
    assert_eq!(texts, vec!["Rust is great", "more rust please"]);
    assert_eq!(hits[0].url.as_deref(), Some("https://example.social/@me/3"));
    assert!(source.thread_calls().is_empty());
}

#[tokio::test]
async fn search_ignores_recent_budget_and_stops_on_empty_page() {
    let source = ScriptedSource::new(vec![
        page(vec![original("2", "needle", 0, 0)], Some("2")),
        page(Vec::new(), Some("2")),
    ]);

    let count = search_statuses(
        &source,
        SELF_ID,
        &fetch_config(),
        "needle",
        &ProgressBar::hidden(),
        |_| {},
    )
    .await
    .expect("search succeeds");

    assert_eq!(count, 1);
    assert_eq!(source.page_calls(), 2);
}
