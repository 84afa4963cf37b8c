//! Analyzer configuration.
//!
//! Configuration is loaded from TOML or JSON files (selected by file
//! extension) with the following resolution order:
//! 1. `--config <path>` equivalent (explicit path from the caller)
//! 2. `~/.huginn/config.toml` (user)
//! 3. `/etc/huginn/config.toml` (system)
//! 4. Built-in defaults
//!
//! The configuration is data, not code: keyword lists, weights, and
//! thresholds can all be swapped without touching the scoring logic.
//! Every load path validates before returning, so a malformed
//! configuration fails fast rather than partway through a batch.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::types::SentimentLabel;
use crate::{HuginnError, Result};

/// Scoring and aggregation configuration.
///
/// Constructed once at process start and shared read-only (typically via
/// [`Arc`]) by all scoring calls; there is no writer after initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Keywords that contribute positive polarity.
    #[serde(default = "default_positive_keywords")]
    pub positive_keywords: Vec<String>,
    /// Keywords that contribute negative polarity.
    #[serde(default = "default_negative_keywords")]
    pub negative_keywords: Vec<String>,
    /// Score contribution per matched positive keyword.
    #[serde(default = "default_weight")]
    pub positive_weight: f64,
    /// Score contribution per matched negative keyword.
    #[serde(default = "default_weight")]
    pub negative_weight: f64,
    /// Normalized scores above this are labelled positive (default: 0.1).
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: f64,
    /// Normalized scores below this are labelled negative (default: -0.1).
    #[serde(default = "default_negative_threshold")]
    pub negative_threshold: f64,
    /// Raw score divisor; the normalized score saturates at ±1.0 once the
    /// weighted match sum reaches this many points (default: 3.0).
    #[serde(default = "default_saturation")]
    pub score_saturation: f64,
    /// Evidence count at which confidence saturates at 1.0 (default: 3.0).
    #[serde(default = "default_saturation")]
    pub confidence_saturation: f64,
    /// Verdicts with confidence above this count as high-confidence in
    /// aggregate reporting (default: 0.7).
    #[serde(default = "default_high_confidence_threshold")]
    pub high_confidence_threshold: f64,
    /// Match keywords as bare substrings instead of at word boundaries.
    ///
    /// Off by default so "love" does not match inside "lovely".
    #[serde(default)]
    pub substring_match: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            positive_keywords: default_positive_keywords(),
            negative_keywords: default_negative_keywords(),
            positive_weight: default_weight(),
            negative_weight: default_weight(),
            positive_threshold: default_positive_threshold(),
            negative_threshold: default_negative_threshold(),
            score_saturation: default_saturation(),
            confidence_saturation: default_saturation(),
            high_confidence_threshold: default_high_confidence_threshold(),
            substring_match: false,
        }
    }
}

fn default_positive_keywords() -> Vec<String> {
    [
        "love",
        "amazing",
        "impressed",
        "quality",
        "great",
        "excellent",
        "wonderful",
        "outstanding",
        "fantastic",
        "awesome",
        "perfect",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_negative_keywords() -> Vec<String> {
    [
        "disappointing",
        "not happy",
        "hope they improve",
        "bad",
        "terrible",
        "awful",
        "worst",
        "hate",
        "horrible",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_weight() -> f64 {
    1.0
}

fn default_positive_threshold() -> f64 {
    0.1
}

fn default_negative_threshold() -> f64 {
    -0.1
}

fn default_saturation() -> f64 {
    3.0
}

fn default_high_confidence_threshold() -> f64 {
    0.7
}

impl AnalyzerConfig {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided; must exist)
    /// 2. `~/.huginn/config.toml`
    /// 3. `/etc/huginn/config.toml`
    /// 4. Built-in defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Arc<Self>> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Arc::new(Self::default())),
        }
    }

    /// Load and validate configuration from a specific file.
    ///
    /// Files ending in `.json` are parsed as JSON; everything else is
    /// parsed as TOML.
    pub fn load_from_file(path: &Path) -> Result<Arc<Self>> {
        let content = fs::read_to_string(path).map_err(|e| {
            HuginnError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| {
                HuginnError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
            })?
        } else {
            toml::from_str(&content).map_err(|e| {
                HuginnError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
            })?
        };
        config.validate()?;
        Ok(Arc::new(config))
    }

    /// Resolve the config file path, or `None` to use built-in defaults.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(HuginnError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".huginn").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/huginn/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }

    /// Check the configuration for contradictions.
    ///
    /// Called on every load path; a bad value is rejected here, at
    /// startup, never mid-batch.
    pub fn validate(&self) -> Result<()> {
        for keyword in self
            .positive_keywords
            .iter()
            .chain(&self.negative_keywords)
        {
            if keyword.trim().is_empty() {
                return Err(HuginnError::Configuration(
                    "Keyword lists must not contain empty entries".to_string(),
                ));
            }
        }
        if !(self.positive_weight.is_finite() && self.positive_weight >= 0.0) {
            return Err(HuginnError::Configuration(format!(
                "positive_weight must be finite and non-negative, got {}",
                self.positive_weight
            )));
        }
        if !(self.negative_weight.is_finite() && self.negative_weight >= 0.0) {
            return Err(HuginnError::Configuration(format!(
                "negative_weight must be finite and non-negative, got {}",
                self.negative_weight
            )));
        }
        // Thresholds must straddle zero so a zero score is always neutral.
        if !(self.positive_threshold.is_finite()
            && (0.0..=1.0).contains(&self.positive_threshold))
        {
            return Err(HuginnError::Configuration(format!(
                "positive_threshold must be within [0.0, 1.0], got {}",
                self.positive_threshold
            )));
        }
        if !(self.negative_threshold.is_finite()
            && (-1.0..=0.0).contains(&self.negative_threshold))
        {
            return Err(HuginnError::Configuration(format!(
                "negative_threshold must be within [-1.0, 0.0], got {}",
                self.negative_threshold
            )));
        }
        if !(self.score_saturation.is_finite() && self.score_saturation > 0.0) {
            return Err(HuginnError::Configuration(format!(
                "score_saturation must be a positive number, got {}",
                self.score_saturation
            )));
        }
        if !(self.confidence_saturation.is_finite() && self.confidence_saturation > 0.0) {
            return Err(HuginnError::Configuration(format!(
                "confidence_saturation must be a positive number, got {}",
                self.confidence_saturation
            )));
        }
        if !(self.high_confidence_threshold.is_finite()
            && (0.0..=1.0).contains(&self.high_confidence_threshold))
        {
            return Err(HuginnError::Configuration(format!(
                "high_confidence_threshold must be within [0.0, 1.0], got {}",
                self.high_confidence_threshold
            )));
        }
        Ok(())
    }

    /// Assign a label to a normalized score by the configured thresholds.
    pub fn label_for(&self, score: f64) -> SentimentLabel {
        if score > self.positive_threshold {
            SentimentLabel::Positive
        } else if score < self.negative_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.positive_keywords.len(), 11);
        assert_eq!(config.negative_keywords.len(), 9);
        assert_eq!(config.high_confidence_threshold, 0.7);
    }

    #[test]
    fn parse_minimal_toml_keeps_defaults() {
        let toml = r#"
            positive_threshold = 0.2
        "#;
        let config: AnalyzerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.positive_threshold, 0.2);
        // Defaults preserved
        assert_eq!(config.negative_threshold, -0.1);
        assert_eq!(config.score_saturation, 3.0);
        assert!(!config.substring_match);
    }

    #[test]
    fn parse_full_toml() {
        let toml = r#"
            positive_keywords = ["good", "nice"]
            negative_keywords = ["bad"]
            positive_weight = 2.0
            negative_weight = 1.5
            positive_threshold = 0.25
            negative_threshold = -0.25
            score_saturation = 4.0
            confidence_saturation = 2.0
            high_confidence_threshold = 0.8
            substring_match = true
        "#;
        let config: AnalyzerConfig = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.positive_keywords, vec!["good", "nice"]);
        assert_eq!(config.negative_weight, 1.5);
        assert!(config.substring_match);
    }

    #[test]
    fn empty_keyword_rejected() {
        let config = AnalyzerConfig {
            negative_keywords: vec!["bad".to_string(), "  ".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("empty entries"));
    }

    #[test]
    fn negative_weight_rejected() {
        let config = AnalyzerConfig {
            positive_weight: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn thresholds_must_straddle_zero() {
        let config = AnalyzerConfig {
            positive_threshold: -0.2,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AnalyzerConfig {
            negative_threshold: 0.2,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_saturation_rejected() {
        let config = AnalyzerConfig {
            score_saturation: 0.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("score_saturation"));
    }

    #[test]
    fn label_for_uses_thresholds() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.label_for(0.5), SentimentLabel::Positive);
        assert_eq!(config.label_for(-0.5), SentimentLabel::Negative);
        assert_eq!(config.label_for(0.0), SentimentLabel::Neutral);
        // Threshold values themselves are neutral (strict comparison)
        assert_eq!(config.label_for(0.1), SentimentLabel::Neutral);
        assert_eq!(config.label_for(-0.1), SentimentLabel::Neutral);
    }

    #[test]
    fn config_not_found_returns_error() {
        let result = AnalyzerConfig::load(Some(Path::new("/nonexistent/config.toml")));
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Config file not found"));
    }
}
