//! Huginn - Lexical sentiment scoring and insight aggregation
//!
//! This crate turns short free-text statements (e.g. influencer quotes)
//! into sentiment verdicts and reduces per-batch verdicts into insight
//! summaries with ranked recommendations. Scoring is a fixed, auditable
//! keyword rule engine, not a statistical model: identical input and
//! configuration always produce identical output.
//!
//! The [`SentimentScorer`] and [`InsightGenerator`] traits are the seams;
//! any implementation of either can be swapped in through the
//! [`AnalysisService`] builder. Transport concerns (HTTP, wire formats,
//! request validation) live with the caller.
//!
//! # Example
//!
//! ```rust
//! use huginn::AnalysisService;
//!
//! fn main() -> huginn::Result<()> {
//!     let service = AnalysisService::builder().build()?;
//!
//!     let summary = service.insights(&[
//!         "I love this product!",
//!         "This is terrible.",
//!         "It is okay.",
//!     ]);
//!
//!     println!("{}", summary.narrative);
//!     for recommendation in &summary.recommendations {
//!         println!("- {recommendation}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod insight;
pub mod scorer;
pub mod service;
pub mod telemetry;
pub mod traits;
pub mod types;

// Re-export main types at crate root
pub use config::AnalyzerConfig;
pub use error::{HuginnError, Result};
pub use insight::{InsightEngine, ProportionBand};
pub use scorer::KeywordScorer;
pub use service::{AnalysisService, AnalysisServiceBuilder};
pub use traits::{InsightGenerator, SentimentScorer};

// Re-export all types
pub use types::{
    InsightSummary, ProcessingMetrics, SentimentDistribution, SentimentLabel, SentimentVerdict,
};
