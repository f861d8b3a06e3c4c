//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    to_toml, ConfigLoader, DictionaryConfig, LogConfig, SearchConfig, Validate, WordbankConfig,
};
use crate::error::config::ConfigError;
use crate::search::EngineKind;
use crate::tests::TestFixture;
use std::path::PathBuf;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = WordbankConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.dictionary.path, PathBuf::from("EnWords.csv"));
    assert_eq!(config.search.prefix_limit, 10);
    assert_eq!(config.search.suggestion_engine, EngineKind::Bst);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = WordbankConfig::default();

    config.search.prefix_limit = 0;
    assert!(config.validate().is_err());

    config.search.prefix_limit = 1001;
    assert!(config.validate().is_err());

    config.search.prefix_limit = 1000;
    assert!(config.validate().is_ok());

    config.log.level = "loud".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(msg)) if msg.contains("loud")
    ));
}

/// Test the section validators on their own.
#[test]
fn test_specific_validation_rules() {
    let dictionary = DictionaryConfig {
        path: PathBuf::new(),
        skip_malformed: true,
    };
    assert!(dictionary.validate().is_err());

    for level in ["trace", "debug", "info", "warn", "error"] {
        let log = LogConfig {
            level: level.to_string(),
            ..LogConfig::default()
        };
        assert!(log.validate().is_ok(), "{level}");
    }

    let search = SearchConfig {
        prefix_limit: 1,
        ..SearchConfig::default()
    };
    assert!(search.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "wordbank.toml",
            r#"
            [dictionary]
            path = "/data/words.csv"

            [search]
            prefix_limit = 25
            default_engine = "avl"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.dictionary.path, PathBuf::from("/data/words.csv"));
    assert_eq!(config.search.prefix_limit, 25);
    assert_eq!(config.search.default_engine, EngineKind::Avl);

    // Other values should be defaults
    assert!(config.dictionary.skip_malformed);
    assert_eq!(config.search.suggestion_engine, EngineKind::Bst);
    assert_eq!(config.log, LogConfig::default());
}

/// Test loading a JSON configuration file.
#[test]
fn test_load_json_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("wordbank.json", r#"{ "search": { "suggestion_engine": "rb" } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON").load().unwrap();
    assert_eq!(config.search.suggestion_engine, EngineKind::Rb);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("env.toml", "[search]\nprefix_limit = 25\n")
        .unwrap();

    fixture.set_env("TEST_ENV__SEARCH__PREFIX_LIMIT", "40");
    fixture.set_env("TEST_ENV__LOG__JSON", "true");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV").load().unwrap();

    assert_eq!(config.search.prefix_limit, 40);
    assert!(config.log.json);
}

/// Test that an out-of-range value from the environment fails validation.
#[test]
fn test_env_var_validation() {
    let mut fixture = TestFixture::new().unwrap();
    fixture.set_env("TEST_ENV_BAD__SEARCH__PREFIX_LIMIT", "0");

    let result = ConfigLoader::new(None::<PathBuf>, "TEST_ENV_BAD").load();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("invalid.toml", "[search\nprefix_limit = ten\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test the missing file and unsupported extension paths.
#[test]
fn test_load_missing_and_unsupported() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("absent.toml");
    assert!(matches!(
        ConfigLoader::new(Some(&missing), "TEST_MISSING").load(),
        Err(ConfigError::FileNotFound(path)) if path == missing
    ));

    let ini = fixture.write_file("wordbank.ini", "x=1").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&ini), "TEST_INI").load(),
        Err(ConfigError::ParseError(_))
    ));
}

/// Test that the generated TOML loads back to the defaults.
#[test]
fn test_generated_config_round_trip() {
    let fixture = TestFixture::new().unwrap();
    let rendered = to_toml(&WordbankConfig::default()).unwrap();
    assert!(rendered.contains("[search]"));

    let path = fixture.write_file("generated.toml", rendered).unwrap();
    let loaded = ConfigLoader::new(Some(&path), "TEST_GENERATED").load().unwrap();
    assert_eq!(loaded, WordbankConfig::default());
}
