pub mod aggregate;
pub mod classify;
pub mod gather;
pub mod ranking;
pub mod summary;

pub use aggregate::{PostMetrics, StatsAggregate};
pub use classify::Classifier;
pub use gather::gather_stats;
pub use ranking::{rank_counts, rank_metrics, RankedEntry, SortKey};
pub use summary::AccountSummary;
