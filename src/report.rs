use std::fmt::Write as _;

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Style, Width};

use crate::search::SearchHit;
use crate::stats::{rank_counts, rank_metrics, AccountSummary, RankedEntry, SortKey, StatsAggregate};
use crate::{format_count, format_ratio};

/// Borders and padding of a two-column table: `│ label │ value │`.
const TABLE_CHROME: usize = 7;

/// Narrowest `columns` that still leaves room for a label beside the widest
/// value header.
pub const MIN_COLUMNS: usize = 30;

/// Layout for a ranked table. Rows must already be filtered, sorted and cut.
pub fn render_table(
    label_header: &str,
    value_header: &str,
    empty_text: &str,
    rows: &[RankedEntry],
    columns: usize,
) -> String {
    if rows.is_empty() {
        return format!("{}\n{}\n", label_header, empty_text);
    }

    let mut builder = Builder::default();
    builder.push_record([label_header.to_string(), value_header.to_string()]);
    let mut value_width = value_header.chars().count();
    for row in rows {
        let value = format_count(row.value);
        value_width = value_width.max(value.chars().count());
        builder.push_record([row.label.clone(), value]);
    }

    let label_width = columns
        .saturating_sub(value_width + TABLE_CHROME)
        .max(1);

    let mut table = builder.build();
    table.with(Style::modern());
    table.modify(Columns::first(), Width::wrap(label_width));
    table.with(Width::truncate(columns));

    format!("{}\n", table)
}

pub fn render_summary(summary: &AccountSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Total toots: {} (excluding replies & boosts)",
        format_count(summary.total_originals)
    );
    let _ = writeln!(
        out,
        "Toots per day: {} (account created {} days ago)",
        format_ratio(summary.originals_per_day),
        summary.days_active
    );
    let _ = writeln!(
        out,
        "Ratio toots/replies: {}",
        format_ratio(summary.originals_per_reply)
    );
    let _ = writeln!(
        out,
        "New followers per day: {}",
        format_ratio(summary.followers_per_day)
    );
    let _ = writeln!(
        out,
        "New followings per day: {}",
        format_ratio(summary.following_per_day)
    );
    let _ = writeln!(
        out,
        "Likes per toot: {} (total likes: {})",
        format_ratio(summary.likes_per_toot),
        format_count(summary.total_likes)
    );
    let _ = writeln!(
        out,
        "Boosts per toot: {} (total boosts: {})",
        format_ratio(summary.boosts_per_toot),
        format_count(summary.total_boosts)
    );
    let _ = writeln!(
        out,
        "Replies per toot: {} (total replies: {})",
        format_ratio(summary.replies_per_toot),
        format_count(summary.total_replies)
    );
    out
}

/// The full stats report: summary, interactions, toots, tags.
pub fn render_report(stats: &StatsAggregate, top: usize, columns: usize) -> String {
    let mut sections = vec![render_summary(&AccountSummary::from_aggregate(stats))];

    let interactions = [
        ("Users you mentioned most", &stats.mentions),
        ("Users you boosted most", &stats.boosts_given),
        ("Users that responded most", &stats.responses),
    ];
    for (title, counts) in interactions {
        sections.push(render_table(
            title,
            "Interactions",
            "No interactions found.",
            &rank_counts(counts, top),
            columns,
        ));
    }

    let toots = [
        ("Most replied-to toots", SortKey::Replies),
        ("Most liked toots", SortKey::Likes),
        ("Most boosted toots", SortKey::Boosts),
        ("Highest scoring toots", SortKey::Score),
    ];
    for (title, key) in toots {
        sections.push(render_table(
            title,
            key.label(),
            "No toots found.",
            &rank_metrics(&stats.original_posts, key, top),
            columns,
        ));
    }

    let tags = [
        ("Tags used that got the most likes", SortKey::Likes),
        ("Tags used that got the most boosts", SortKey::Boosts),
    ];
    for (title, key) in tags {
        sections.push(render_table(
            title,
            key.label(),
            "No tags found.",
            &rank_metrics(&stats.tags, key, top),
            columns,
        ));
    }

    sections.join("\n")
}

pub fn render_search_hit(hit: &SearchHit) -> String {
    format!(
        "Found toot: {}\nDate: {}\nURL: {}\n",
        hit.text,
        hit.created_at.format("%d %b %y %H:%M %Z"),
        hit.url.as_deref().unwrap_or("-")
    )
}
