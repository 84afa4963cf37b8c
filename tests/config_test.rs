//! Tests for configuration file loading and fail-fast validation.

use std::fs;
use std::path::Path;

use huginn::{AnalyzerConfig, HuginnError};

#[test]
fn load_toml_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
            positive_keywords = ["brilliant", "superb"]
            negative_keywords = ["dreadful"]
            high_confidence_threshold = 0.8
        "#,
    )
    .unwrap();

    let config = AnalyzerConfig::load_from_file(&path).unwrap();
    assert_eq!(config.positive_keywords, vec!["brilliant", "superb"]);
    assert_eq!(config.negative_keywords, vec!["dreadful"]);
    assert_eq!(config.high_confidence_threshold, 0.8);
    // Unspecified fields keep their defaults
    assert_eq!(config.score_saturation, 3.0);
}

#[test]
fn load_json_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "positive_keywords": ["stellar"],
            "negative_keywords": ["abysmal"],
            "substring_match": true
        }"#,
    )
    .unwrap();

    let config = AnalyzerConfig::load_from_file(&path).unwrap();
    assert_eq!(config.positive_keywords, vec!["stellar"]);
    assert!(config.substring_match);
}

#[test]
fn malformed_file_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "positive_keywords = 42").unwrap();

    let err = AnalyzerConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, HuginnError::Configuration(_)));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn invalid_values_fail_at_load_time() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "score_saturation = 0.0").unwrap();

    let err = AnalyzerConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("score_saturation"));
}

#[test]
fn out_of_range_confidence_threshold_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "high_confidence_threshold = 1.5").unwrap();

    let err = AnalyzerConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("high_confidence_threshold"));
}

#[test]
fn explicit_missing_path_is_an_error() {
    let err = AnalyzerConfig::load(Some(Path::new("/nonexistent/huginn.toml"))).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

#[test]
fn explicit_path_wins_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, r#"positive_threshold = 0.3"#).unwrap();

    let config = AnalyzerConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(config.positive_threshold, 0.3);
}
