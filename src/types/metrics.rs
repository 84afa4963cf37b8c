//! Batch processing statistics.

use serde::{Deserialize, Serialize};

/// Statistics describing one scored batch.
///
/// Produced alongside the verdicts by
/// [`AnalysisService::analyze_with_metrics`](crate::AnalysisService::analyze_with_metrics);
/// callers that expose processing metadata serialize this next to the
/// verdicts themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingMetrics {
    pub total_processed: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    /// Mean of per-verdict confidence values; `0.0` for an empty batch.
    pub average_confidence: f64,
    /// Wall-clock processing time in seconds.
    pub processing_time: f64,
}
