/*!
 * Tests for application configuration
 */

use anyhow::Result;
use redletter::app_config::{Config, LogLevel};

/// Test that the default configuration is valid and has expected values
#[test]
fn test_config_withDefaults_shouldBeValid() -> Result<()> {
    let config = Config::default();

    assert_eq!(config.corpus_dir, "corpus");
    assert_eq!(config.log_level, LogLevel::Info);
    config.validate()?;
    Ok(())
}

/// Test that a full config file parses with its values
#[test]
fn test_config_withExplicitJson_shouldParseAllFields() -> Result<()> {
    let json = r#"{ "corpus_dir": "data/bibles", "log_level": "debug" }"#;

    let config: Config = serde_json::from_str(json)?;

    assert_eq!(config.corpus_dir, "data/bibles");
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

/// Test that missing fields fall back to defaults
#[test]
fn test_config_withEmptyJson_shouldUseDefaults() -> Result<()> {
    let config: Config = serde_json::from_str("{}")?;

    assert_eq!(config.corpus_dir, "corpus");
    assert_eq!(config.log_level, LogLevel::Info);
    Ok(())
}

/// Test that an empty corpus directory fails validation
#[test]
fn test_config_validate_withEmptyCorpusDir_shouldFail() {
    let config = Config {
        corpus_dir: "   ".to_string(),
        ..Config::default()
    };

    assert!(config.validate().is_err());
}

/// Test the log level mapping to the log crate
#[test]
fn test_log_level_toLevelFilter_shouldMatchLogCrate() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
