//! Keyword-based lexical sentiment scoring.
//!
//! The scorer is a fixed, auditable rule engine: every configured keyword
//! found in the text contributes its category weight (positive adds,
//! negative subtracts), the weighted sum is normalized into `[-1.0, 1.0]`
//! by a saturating divisor, and the label falls out of fixed thresholds.
//! Each configured keyword is counted at most once per statement, at its
//! first occurrence.

use std::sync::Arc;

use crate::config::AnalyzerConfig;
use crate::traits::SentimentScorer;
use crate::types::SentimentVerdict;

/// Keyword polarity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Positive,
    Negative,
}

/// Deterministic keyword-matching sentiment scorer.
///
/// Holds a shared read-only [`AnalyzerConfig`]; keyword lists are
/// lowercased once at construction so per-statement scoring only
/// lowercases the input text.
pub struct KeywordScorer {
    config: Arc<AnalyzerConfig>,
    positive: Vec<String>,
    negative: Vec<String>,
}

impl KeywordScorer {
    /// Create a scorer over a shared configuration.
    pub fn new(config: Arc<AnalyzerConfig>) -> Self {
        let positive = config
            .positive_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();
        let negative = config
            .negative_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();
        Self {
            config,
            positive,
            negative,
        }
    }

    /// Byte offset of the first qualifying occurrence of `needle` in
    /// `haystack`, or `None`.
    ///
    /// With word-boundary matching (the default), both edges of the match
    /// must sit against a non-alphanumeric character or the string edge,
    /// so "love" does not match inside "lovely". Multi-word phrases get
    /// boundaries at the phrase edges only.
    fn find_match(&self, haystack: &str, needle: &str) -> Option<usize> {
        if self.config.substring_match {
            return haystack.find(needle);
        }
        let mut from = 0;
        while let Some(pos) = haystack[from..].find(needle) {
            let start = from + pos;
            let end = start + needle.len();
            let left_ok = start == 0
                || haystack[..start]
                    .chars()
                    .next_back()
                    .is_some_and(|c| !c.is_alphanumeric());
            let right_ok = end == haystack.len()
                || haystack[end..]
                    .chars()
                    .next()
                    .is_some_and(|c| !c.is_alphanumeric());
            if left_ok && right_ok {
                return Some(start);
            }
            // Advance past the first char of this occurrence, staying on
            // a char boundary.
            from = start
                + haystack[start..]
                    .chars()
                    .next()
                    .map_or(1, |c| c.len_utf8());
        }
        None
    }
}

impl SentimentScorer for KeywordScorer {
    fn score(&self, text: &str) -> SentimentVerdict {
        let lowered = text.to_lowercase();

        // (first offset, keyword, polarity) per matched keyword
        let mut matches: Vec<(usize, &str, Polarity)> = Vec::new();
        for keyword in &self.positive {
            if let Some(offset) = self.find_match(&lowered, keyword) {
                matches.push((offset, keyword, Polarity::Positive));
            }
        }
        for keyword in &self.negative {
            if let Some(offset) = self.find_match(&lowered, keyword) {
                matches.push((offset, keyword, Polarity::Negative));
            }
        }
        if matches.is_empty() {
            return SentimentVerdict::neutral(text);
        }
        // Evidence in order of first appearance; stable sort keeps the
        // configured order for keywords sharing an offset.
        matches.sort_by_key(|(offset, _, _)| *offset);

        let raw: f64 = matches
            .iter()
            .map(|(_, _, polarity)| match polarity {
                Polarity::Positive => self.config.positive_weight,
                Polarity::Negative => -self.config.negative_weight,
            })
            .sum();
        let score = (raw / self.config.score_saturation).clamp(-1.0, 1.0);
        let confidence =
            (matches.len() as f64 / self.config.confidence_saturation).clamp(0.0, 1.0);

        SentimentVerdict {
            statement: text.to_string(),
            label: self.config.label_for(score),
            score,
            confidence,
            evidence: matches
                .into_iter()
                .map(|(_, keyword, _)| keyword.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SentimentLabel;

    fn scorer() -> KeywordScorer {
        KeywordScorer::new(Arc::new(AnalyzerConfig::default()))
    }

    #[test]
    fn word_boundary_rejects_embedded_keyword() {
        let s = scorer();
        assert_eq!(s.find_match("what a lovely day", "love"), None);
        assert_eq!(s.find_match("lovely, but i love it", "love"), Some(14));
    }

    #[test]
    fn boundary_match_at_string_edges() {
        let s = scorer();
        assert_eq!(s.find_match("love", "love"), Some(0));
        assert_eq!(s.find_match("pure love", "love"), Some(5));
    }

    #[test]
    fn substring_mode_matches_embedded_keyword() {
        let config = AnalyzerConfig {
            substring_match: true,
            ..Default::default()
        };
        let s = KeywordScorer::new(Arc::new(config));
        assert_eq!(s.find_match("what a lovely day", "love"), Some(7));
    }

    #[test]
    fn phrase_keyword_matches_across_words() {
        let s = scorer();
        let verdict = s.score("Honestly not happy with this release");
        assert_eq!(verdict.label, SentimentLabel::Negative);
        assert_eq!(verdict.evidence, vec!["not happy"]);
    }

    #[test]
    fn non_ascii_text_does_not_panic() {
        let s = scorer();
        let verdict = s.score("cœur ❤ love — génial");
        assert_eq!(verdict.label, SentimentLabel::Positive);
        assert_eq!(verdict.evidence, vec!["love"]);
    }
}
