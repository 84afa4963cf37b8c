//! Batch insight summary types.

use serde::{Deserialize, Serialize};

use super::SentimentLabel;

/// Per-label verdict counts for a batch.
///
/// All three labels are always present; labels with no verdicts report
/// zero. Serializes as a map keyed by the lowercase label names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    #[serde(default)]
    pub positive: usize,
    #[serde(default)]
    pub negative: usize,
    #[serde(default)]
    pub neutral: usize,
}

impl SentimentDistribution {
    /// Increment the count for a label.
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    /// Count for a single label.
    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    /// Total verdicts across all labels.
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// The label with the highest count.
    ///
    /// Ties are resolved by a fixed priority order:
    /// `Positive` > `Negative` > `Neutral`.
    pub fn dominant(&self) -> SentimentLabel {
        if self.positive >= self.negative && self.positive >= self.neutral {
            SentimentLabel::Positive
        } else if self.negative >= self.neutral {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// The aggregated insight produced for a batch of verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightSummary {
    /// Generated narrative describing the distribution and confidence.
    pub narrative: String,
    pub distribution: SentimentDistribution,
    /// Arithmetic mean of all verdict scores; `0.0` for an empty batch.
    pub average_score: f64,
    pub total_statements: usize,
    /// Ordered recommendations, most salient first.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_records_and_totals() {
        let mut dist = SentimentDistribution::default();
        dist.record(SentimentLabel::Positive);
        dist.record(SentimentLabel::Positive);
        dist.record(SentimentLabel::Neutral);
        assert_eq!(dist.count(SentimentLabel::Positive), 2);
        assert_eq!(dist.count(SentimentLabel::Negative), 0);
        assert_eq!(dist.total(), 3);
    }

    #[test]
    fn dominant_picks_highest_count() {
        let dist = SentimentDistribution {
            positive: 1,
            negative: 4,
            neutral: 2,
        };
        assert_eq!(dist.dominant(), SentimentLabel::Negative);
    }

    #[test]
    fn dominant_tie_prefers_positive_then_negative() {
        let three_way = SentimentDistribution {
            positive: 1,
            negative: 1,
            neutral: 1,
        };
        assert_eq!(three_way.dominant(), SentimentLabel::Positive);

        let neg_neu = SentimentDistribution {
            positive: 0,
            negative: 2,
            neutral: 2,
        };
        assert_eq!(neg_neu.dominant(), SentimentLabel::Negative);
    }

    #[test]
    fn distribution_serializes_all_three_labels() {
        let dist = SentimentDistribution::default();
        let json = serde_json::to_string(&dist).unwrap();
        assert_eq!(json, r#"{"positive":0,"negative":0,"neutral":0}"#);
    }
}
