//! Engine configuration from JSON files.

use crate::common::pets_corpus;
use searchit::{ConfigError, EngineConfig, QueryEngine};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn partial_file_keeps_defaults() {
    let file = config_file(r#"{ "cacheCapacity": 8 }"#);
    let config = EngineConfig::from_path(file.path()).unwrap();
    assert_eq!(config.cache_capacity, 8);
    assert_eq!(config.cache_min_query_len, 4);
    assert_eq!(config.cache_max_query_len, 100);
}

#[test]
fn file_config_drives_the_engine() {
    let file = config_file(r#"{ "cacheMinQueryLen": 1, "descriptionMaxChars": 4 }"#);
    let config = EngineConfig::from_path(file.path()).unwrap();
    let engine = QueryEngine::from_documents(pets_corpus(), config).unwrap();

    let result = engine.search("pet");
    assert!(engine.is_cached("pet"));
    assert_eq!(result.items[0].description, "Cats");
}

#[test]
fn unknown_field_is_rejected() {
    let file = config_file(r#"{ "cacheSize": 8 }"#);
    assert!(matches!(EngineConfig::from_path(file.path()), Err(ConfigError::Parse(_))));
}

#[test]
fn missing_file_reports_path() {
    let err = EngineConfig::from_path("/no/such/searchit.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("searchit.json"));
}
