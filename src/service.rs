//! Batch analysis orchestration.
//!
//! [`AnalysisService`] wires a scorer and an insight generator together
//! behind one entry point: callers hand it raw statements and get back
//! verdicts, summaries, or both. Custom strategies plug in through the
//! builder.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, instrument};

use crate::config::AnalyzerConfig;
use crate::insight::InsightEngine;
use crate::scorer::KeywordScorer;
use crate::telemetry;
use crate::traits::{InsightGenerator, SentimentScorer};
use crate::types::{InsightSummary, ProcessingMetrics, SentimentVerdict};
use crate::Result;

/// Sentiment analysis and insight generation service.
///
/// Scoring is stateless and side-effect-free; the service only adds
/// batching, telemetry, and the reduction barrier before aggregation.
pub struct AnalysisService {
    config: Arc<AnalyzerConfig>,
    scorer: Box<dyn SentimentScorer>,
    generator: Box<dyn InsightGenerator>,
}

impl AnalysisService {
    /// Create a builder for configuring the service.
    pub fn builder() -> AnalysisServiceBuilder {
        AnalysisServiceBuilder::new()
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Score a batch of statements, preserving input order.
    ///
    /// Statements are scored independently; an empty batch yields an
    /// empty vector.
    #[instrument(skip_all, fields(statements = statements.len()))]
    pub fn analyze<S: AsRef<str>>(&self, statements: &[S]) -> Vec<SentimentVerdict> {
        let start = Instant::now();
        let verdicts: Vec<SentimentVerdict> = statements
            .iter()
            .map(|s| self.scorer.score(s.as_ref()))
            .collect();
        for verdict in &verdicts {
            metrics::counter!(telemetry::STATEMENTS_SCORED_TOTAL,
                "label" => verdict.label.as_str(),
            )
            .increment(1);
        }
        Self::record_batch("sentiment", start);
        debug!(verdicts = verdicts.len(), "batch scored");
        verdicts
    }

    /// Score a batch and compute its [`ProcessingMetrics`].
    pub fn analyze_with_metrics<S: AsRef<str>>(
        &self,
        statements: &[S],
    ) -> (Vec<SentimentVerdict>, ProcessingMetrics) {
        let start = Instant::now();
        let verdicts = self.analyze(statements);
        let total = verdicts.len();
        let average_confidence = if total == 0 {
            0.0
        } else {
            verdicts.iter().map(|v| v.confidence).sum::<f64>() / total as f64
        };
        let mut positive_count = 0;
        let mut negative_count = 0;
        let mut neutral_count = 0;
        for verdict in &verdicts {
            match verdict.label {
                crate::SentimentLabel::Positive => positive_count += 1,
                crate::SentimentLabel::Negative => negative_count += 1,
                crate::SentimentLabel::Neutral => neutral_count += 1,
            }
        }
        let metrics = ProcessingMetrics {
            total_processed: total,
            positive_count,
            negative_count,
            neutral_count,
            average_confidence,
            processing_time: start.elapsed().as_secs_f64(),
        };
        (verdicts, metrics)
    }

    /// Score a batch and reduce it into an [`InsightSummary`].
    #[instrument(skip_all, fields(statements = statements.len()))]
    pub fn insights<S: AsRef<str>>(&self, statements: &[S]) -> InsightSummary {
        let start = Instant::now();
        let verdicts = self.analyze(statements);
        let summary = self.generator.generate(&verdicts);
        Self::record_batch("insight", start);
        summary
    }

    /// Bulk analysis: insights plus optional processing metadata.
    ///
    /// With `include_metadata` set, a trailing recommendation reports how
    /// many verdicts cleared the high-confidence threshold.
    pub fn bulk_insights<S: AsRef<str>>(
        &self,
        statements: &[S],
        include_metadata: bool,
    ) -> InsightSummary {
        let start = Instant::now();
        let verdicts = self.analyze(statements);
        let mut summary = self.generator.generate(&verdicts);
        if include_metadata {
            let high_confidence = verdicts
                .iter()
                .filter(|v| v.confidence > self.config.high_confidence_threshold)
                .count();
            summary.recommendations.push(format!(
                "Processing metadata: {high_confidence}/{} high-confidence results",
                verdicts.len()
            ));
        }
        Self::record_batch("insight", start);
        summary
    }

    /// Record batch outcome metrics (counter + histogram).
    fn record_batch(operation: &'static str, start: Instant) {
        metrics::counter!(telemetry::BATCHES_TOTAL, "operation" => operation).increment(1);
        metrics::histogram!(telemetry::BATCH_DURATION_SECONDS, "operation" => operation)
            .record(start.elapsed().as_secs_f64());
    }
}

/// Builder for configuring [`AnalysisService`] instances.
pub struct AnalysisServiceBuilder {
    config: Option<Arc<AnalyzerConfig>>,
    scorer: Option<Box<dyn SentimentScorer>>,
    generator: Option<Box<dyn InsightGenerator>>,
}

impl AnalysisServiceBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            scorer: None,
            generator: None,
        }
    }

    /// Use a specific configuration instead of the built-in defaults.
    pub fn config(mut self, config: Arc<AnalyzerConfig>) -> Self {
        self.config = Some(config);
        self
    }

    /// Substitute a custom scoring strategy.
    pub fn scorer(mut self, scorer: Box<dyn SentimentScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    /// Substitute a custom insight generation strategy.
    pub fn generator(mut self, generator: Box<dyn InsightGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Validate the configuration and build the service.
    ///
    /// Fails only on a malformed configuration; this is the single fatal
    /// path, checked here rather than mid-batch.
    pub fn build(self) -> Result<AnalysisService> {
        let config = self
            .config
            .unwrap_or_else(|| Arc::new(AnalyzerConfig::default()));
        config.validate()?;
        let scorer = self
            .scorer
            .unwrap_or_else(|| Box::new(KeywordScorer::new(Arc::clone(&config))));
        let generator = self
            .generator
            .unwrap_or_else(|| Box::new(InsightEngine::new(Arc::clone(&config))));
        info!(
            positive_keywords = config.positive_keywords.len(),
            negative_keywords = config.negative_keywords.len(),
            "analysis service initialized"
        );
        Ok(AnalysisService {
            config,
            scorer,
            generator,
        })
    }
}

impl Default for AnalysisServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
