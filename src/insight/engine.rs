//! Batch insight aggregation engine.

use std::sync::Arc;

use super::narrative::{self, ProportionBand};
use super::recommend;
use crate::config::AnalyzerConfig;
use crate::traits::InsightGenerator;
use crate::types::{InsightSummary, SentimentDistribution, SentimentVerdict};

/// Deterministic insight generator.
///
/// Reduces a batch of verdicts into a distribution, average score, fixed
/// narrative template, and table-driven recommendations. Runs only after
/// every verdict in the batch is available; has no state of its own
/// beyond the shared read-only configuration.
pub struct InsightEngine {
    config: Arc<AnalyzerConfig>,
}

impl InsightEngine {
    /// Create an engine over a shared configuration.
    pub fn new(config: Arc<AnalyzerConfig>) -> Self {
        Self { config }
    }
}

impl InsightGenerator for InsightEngine {
    fn generate(&self, verdicts: &[SentimentVerdict]) -> InsightSummary {
        if verdicts.is_empty() {
            return InsightSummary {
                narrative: narrative::EMPTY_NARRATIVE.to_string(),
                distribution: SentimentDistribution::default(),
                average_score: 0.0,
                total_statements: 0,
                recommendations: Vec::new(),
            };
        }

        let mut distribution = SentimentDistribution::default();
        let mut score_sum = 0.0;
        let mut high_confidence = 0usize;
        for verdict in verdicts {
            distribution.record(verdict.label);
            score_sum += verdict.score;
            if verdict.confidence > self.config.high_confidence_threshold {
                high_confidence += 1;
            }
        }

        let total = verdicts.len();
        let average_score = score_sum / total as f64;
        let dominant = distribution.dominant();
        let count = distribution.count(dominant);
        let share = count as f64 / total as f64;
        let band = ProportionBand::from_share(share);
        let confidence_share = high_confidence as f64 / total as f64;

        let mut recommendations = recommend::for_outcome(dominant, band);
        if confidence_share < 0.5 {
            recommendations.push(recommend::LOW_CONFIDENCE.to_string());
        }

        InsightSummary {
            narrative: narrative::compose(dominant, band, count, total, share, confidence_share),
            distribution,
            average_score,
            total_statements: total,
            recommendations,
        }
    }
}
