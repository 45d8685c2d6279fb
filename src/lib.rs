pub mod config;
pub mod content;
pub mod error;
pub mod fetch;
pub mod models;
pub mod report;
pub mod search;
pub mod source;
pub mod stats;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use models::{Account, Context, Status};
pub use source::{Page, StatusSource};
pub use stats::{gather_stats, PostMetrics, StatsAggregate};

use indicatif::ProgressBar;

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}

/// Two-decimal ratio, or `n/a` when the ratio is undefined.
pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => format_float(value, 2),
        _ => "n/a".to_string(),
    }
}

pub fn format_count(value: u64) -> String {
    value.to_string()
}

/// Count one processed status. The bar's length starts from the server's
/// `statuses_count`, which can lag behind the timeline, so it grows to keep
/// the position from running past it.
pub fn advance_progress(progress: &ProgressBar) {
    progress.inc(1);
    let position = progress.position();
    if progress.length().is_some_and(|length| position > length) {
        progress.set_length(position);
    }
}
