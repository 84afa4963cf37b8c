//! Proportion banding and narrative templates.
//!
//! The narrative is assembled from fixed templates; the only variable
//! parts are the slots (band wording, label, counts, percentages), which
//! keeps the output deterministic and testable.

use serde::{Deserialize, Serialize};

use crate::types::SentimentLabel;

/// Qualitative share of the batch held by the dominant label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProportionBand {
    /// Dominant label holds at least 75% of the batch.
    Overwhelming,
    /// Dominant label holds at least 50% of the batch.
    Mostly,
    /// No label holds a majority.
    Mixed,
}

impl ProportionBand {
    /// Band for a dominant-label share in `[0.0, 1.0]`.
    pub fn from_share(share: f64) -> Self {
        if share >= 0.75 {
            ProportionBand::Overwhelming
        } else if share >= 0.5 {
            ProportionBand::Mostly
        } else {
            ProportionBand::Mixed
        }
    }
}

/// Narrative for a batch with no statements.
pub(crate) const EMPTY_NARRATIVE: &str = "No statements were analyzed.";

/// Label-specific closing sentence.
fn label_tail(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "Influencers are expressing satisfaction and enthusiasm.",
        SentimentLabel::Negative => "Significant issues require attention.",
        SentimentLabel::Neutral => "Influencers are taking a wait-and-see approach.",
    }
}

/// Assemble the batch narrative.
///
/// `share` is the dominant label's fraction of the batch and
/// `confidence_share` the fraction of verdicts scored with high
/// confidence; both render as percentages with one decimal.
pub(crate) fn compose(
    label: SentimentLabel,
    band: ProportionBand,
    count: usize,
    total: usize,
    share: f64,
    confidence_share: f64,
) -> String {
    let lead = match band {
        ProportionBand::Overwhelming => format!(
            "Overwhelmingly {label} sentiment detected ({count}/{total}, {:.1}%).",
            share * 100.0
        ),
        ProportionBand::Mostly => format!(
            "Mostly {label} sentiment detected ({count}/{total}, {:.1}%).",
            share * 100.0
        ),
        ProportionBand::Mixed => format!(
            "Mixed sentiment with a {label} plurality ({count}/{total}, {:.1}%).",
            share * 100.0
        ),
    };
    format!(
        "{lead} {} Analysis confidence: {:.1}% of statements scored with high confidence.",
        label_tail(label),
        confidence_share * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds() {
        assert_eq!(ProportionBand::from_share(1.0), ProportionBand::Overwhelming);
        assert_eq!(
            ProportionBand::from_share(0.75),
            ProportionBand::Overwhelming
        );
        assert_eq!(ProportionBand::from_share(0.74), ProportionBand::Mostly);
        assert_eq!(ProportionBand::from_share(0.5), ProportionBand::Mostly);
        assert_eq!(ProportionBand::from_share(0.49), ProportionBand::Mixed);
        assert_eq!(ProportionBand::from_share(0.0), ProportionBand::Mixed);
    }

    #[test]
    fn compose_mostly_positive() {
        let narrative = compose(
            SentimentLabel::Positive,
            ProportionBand::Mostly,
            2,
            3,
            2.0 / 3.0,
            0.0,
        );
        assert_eq!(
            narrative,
            "Mostly positive sentiment detected (2/3, 66.7%). \
             Influencers are expressing satisfaction and enthusiasm. \
             Analysis confidence: 0.0% of statements scored with high confidence."
        );
    }

    #[test]
    fn compose_mixed_plurality() {
        let narrative = compose(
            SentimentLabel::Negative,
            ProportionBand::Mixed,
            2,
            5,
            0.4,
            0.6,
        );
        assert!(narrative.starts_with("Mixed sentiment with a negative plurality (2/5, 40.0%)."));
        assert!(narrative.ends_with(
            "Analysis confidence: 60.0% of statements scored with high confidence."
        ));
    }
}
