//! Capability contracts for scoring and aggregation.
//!
//! Any scorer satisfying [`SentimentScorer`] and any generator satisfying
//! [`InsightGenerator`] are interchangeable; the service layer is
//! polymorphic over both, so a different scoring strategy can be swapped
//! in without touching the aggregation side (and vice versa).

use crate::{InsightSummary, SentimentVerdict};

/// A sentiment scoring strategy.
///
/// Implementations are pure functions over the input text and their own
/// read-only configuration: no shared mutable state, no blocking, and no
/// failure mode. Degenerate input (empty, whitespace-only) must yield a
/// neutral verdict with no evidence rather than an error.
pub trait SentimentScorer: Send + Sync {
    /// Score a single statement.
    fn score(&self, text: &str) -> SentimentVerdict;
}

/// An insight aggregation strategy.
///
/// Reduces a complete batch of verdicts into a single summary. Must
/// handle the empty batch without failing.
pub trait InsightGenerator: Send + Sync {
    /// Aggregate a batch of verdicts into a summary.
    fn generate(&self, verdicts: &[SentimentVerdict]) -> InsightSummary;
}
