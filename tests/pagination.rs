mod common;

use common::{fetch_config, original, page, ScriptedSource, SELF_ID};
use tootstats::config::FetchConfig;
use tootstats::fetch::{Paginator, StopReason};

#[tokio::test]
async fn empty_page_stops_even_with_a_cursor() {
    let source = ScriptedSource::new(vec![
        page(vec![original("10", "a", 0, 0)], Some("10")),
        page(vec![original("9", "b", 0, 0)], Some("9")),
        page(Vec::new(), Some("9")),
        page(vec![original("8", "never", 0, 0)], Some("8")),
    ]);
    let config = fetch_config();
    let mut pages = Paginator::new(&source, SELF_ID, &config);

    let mut seen = 0;
    while let Some(statuses) = pages.next_page().await.expect("page") {
        seen += statuses.len();
    }

    assert_eq!(seen, 2);
    assert_eq!(source.page_calls(), 3);
    assert_eq!(pages.stop_reason(), Some(StopReason::EmptyPage));
}

#[tokio::test]
async fn missing_cursor_stops_after_that_page() {
    let source = ScriptedSource::new(vec![
        page(vec![original("10", "a", 0, 0)], Some("10")),
        page(vec![original("9", "b", 0, 0)], None),
    ]);
    let config = fetch_config();
    let mut pages = Paginator::new(&source, SELF_ID, &config);

    let mut seen = 0;
    while let Some(statuses) = pages.next_page().await.expect("page") {
        seen += statuses.len();
    }

    assert_eq!(seen, 2);
    assert_eq!(source.page_calls(), 2);
    assert_eq!(pages.stop_reason(), Some(StopReason::CursorExhausted));
}

#[tokio::test]
async fn empty_string_cursor_stops_after_that_page() {
    let source = ScriptedSource::new(vec![
        page(vec![original("10", "a", 0, 0)], Some("")),
        page(vec![original("9", "never", 0, 0)], Some("9")),
    ]);
    let config = fetch_config();
    let mut pages = Paginator::new(&source, SELF_ID, &config);

    let mut seen = 0;
    while let Some(statuses) = pages.next_page().await.expect("page") {
        seen += statuses.len();
    }

    assert_eq!(seen, 1);
    assert_eq!(source.page_calls(), 1);
    assert_eq!(pages.stop_reason(), Some(StopReason::CursorExhausted));
}

#[tokio::test]
async fn cursor_is_threaded_through_requests() {
    let source = ScriptedSource::new(vec![
        page(vec![original("10", "a", 0, 0)], Some("10")),
        page(vec![original("9", "b", 0, 0)], Some("9")),
        page(Vec::new(), None),
    ]);
    let config = fetch_config();
    let mut pages = Paginator::new(&source, SELF_ID, &config);
    while pages.next_page().await.expect("page").is_some() {}

    assert_eq!(
        source.cursors_seen(),
        vec![None, Some("10".to_string()), Some("9".to_string())]
    );
}

#[tokio::test]
async fn page_limit_caps_a_runaway_cursor() {
    let pages_script = (0..5)
        .map(|n| page(vec![original(&n.to_string(), "loop", 0, 0)], Some("same")))
        .collect();
    let source = ScriptedSource::new(pages_script);
    let config = FetchConfig {
        max_pages: 3,
        ..fetch_config()
    };
    let mut pages = Paginator::new(&source, SELF_ID, &config);
    while pages.next_page().await.expect("page").is_some() {}

    assert_eq!(source.page_calls(), 3);
    assert_eq!(pages.stop_reason(), Some(StopReason::PageLimit));
}

#[tokio::test]
async fn transport_errors_propagate() {
    let source = ScriptedSource::new(vec![page(vec![original("10", "a", 0, 0)], Some("10"))]);
    let config = fetch_config();
    let mut pages = Paginator::new(&source, SELF_ID, &config);

    assert!(pages.next_page().await.expect("first page").is_some());
    let err = pages.next_page().await.expect_err("second page is unscripted");
    assert!(err.is_transport());
}
