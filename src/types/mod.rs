//! Public types for the Huginn API.

mod metrics;
mod summary;
mod verdict;

pub use metrics::ProcessingMetrics;
pub use summary::{InsightSummary, SentimentDistribution};
pub use verdict::{SentimentLabel, SentimentVerdict};
