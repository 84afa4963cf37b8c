//! Sentiment verdict types.
//!
//! A verdict is the scorer's complete judgement of a single statement:
//! the assigned label, a signed strength score, a confidence estimate,
//! and the keyword evidence the judgement rests on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The sentiment category assigned to a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Statement expresses approval or enthusiasm.
    Positive,
    /// Statement expresses criticism or dissatisfaction.
    Negative,
    /// Statement carries no clear polarity.
    Neutral,
}

impl SentimentLabel {
    /// Lowercase wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The verdict produced for a single statement.
///
/// Verdicts are immutable once created. `score` is in `[-1.0, 1.0]`
/// (sign = polarity, magnitude = strength) and `confidence` in
/// `[0.0, 1.0]`. `evidence` lists matched keywords in order of first
/// appearance in the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentVerdict {
    /// The original input text, preserved verbatim.
    pub statement: String,
    pub label: SentimentLabel,
    pub score: f64,
    pub confidence: f64,
    #[serde(default)]
    pub evidence: Vec<String>,
}

impl SentimentVerdict {
    /// A neutral verdict with no evidence, as produced for empty or
    /// matchless input.
    pub fn neutral(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            label: SentimentLabel::Neutral,
            score: 0.0,
            confidence: 0.0,
            evidence: Vec::new(),
        }
    }
}
