//! Recommendation selection table.
//!
//! Recommendations are selected from a static table keyed by
//! `(dominant label, proportion band)`, in table order (most salient
//! first). One deterministic secondary rule appends a data-quality
//! recommendation when too few verdicts were scored with high confidence.

use super::narrative::ProportionBand;
use crate::types::SentimentLabel;

/// Appended when fewer than half of the verdicts are high-confidence.
pub(crate) const LOW_CONFIDENCE: &str =
    "Consider gathering more data for better analysis confidence";

/// `(dominant label, band)` → ordered recommendations.
const RECOMMENDATION_TABLE: &[(SentimentLabel, ProportionBand, &[&str])] = &[
    (
        SentimentLabel::Positive,
        ProportionBand::Overwhelming,
        &[
            "Leverage positive sentiment for marketing campaigns",
            "Identify and amplify positive influencer voices",
            "Maintain current strategies and expand successful initiatives",
        ],
    ),
    (
        SentimentLabel::Positive,
        ProportionBand::Mostly,
        &[
            "Leverage positive sentiment for marketing campaigns",
            "Identify and amplify positive influencer voices",
        ],
    ),
    (
        SentimentLabel::Positive,
        ProportionBand::Mixed,
        &[
            "Investigate the drivers behind the divided opinions",
            "Engage neutral influencers with targeted content",
        ],
    ),
    (
        SentimentLabel::Negative,
        ProportionBand::Overwhelming,
        &[
            "Address negative feedback urgently to prevent reputation damage",
            "Implement customer satisfaction improvement initiatives",
            "Escalate recurring complaints to product owners",
        ],
    ),
    (
        SentimentLabel::Negative,
        ProportionBand::Mostly,
        &[
            "Address negative feedback urgently to prevent reputation damage",
            "Implement customer satisfaction improvement initiatives",
        ],
    ),
    (
        SentimentLabel::Negative,
        ProportionBand::Mixed,
        &[
            "Investigate the drivers behind the divided opinions",
            "Monitor negative feedback channels for emerging issues",
        ],
    ),
    (
        SentimentLabel::Neutral,
        ProportionBand::Overwhelming,
        &[
            "Engage neutral influencers with targeted content",
            "Provide more compelling value propositions",
        ],
    ),
    (
        SentimentLabel::Neutral,
        ProportionBand::Mostly,
        &[
            "Engage neutral influencers with targeted content",
            "Provide more compelling value propositions",
        ],
    ),
    (
        SentimentLabel::Neutral,
        ProportionBand::Mixed,
        &[
            "Investigate the drivers behind the divided opinions",
            "Provide more compelling value propositions",
        ],
    ),
];

/// Ordered recommendations for a batch outcome.
pub(crate) fn for_outcome(label: SentimentLabel, band: ProportionBand) -> Vec<String> {
    RECOMMENDATION_TABLE
        .iter()
        .find(|(l, b, _)| *l == label && *b == band)
        .map(|(_, _, recs)| recs.iter().map(|r| r.to_string()).collect())
        .unwrap_or_default()
}
