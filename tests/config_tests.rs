use std::io::Write;

use sql_schema_parser::config::{Config, ExtractConfig, OutputConfig};
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.extract.extra_stopwords.is_empty());
    assert!(config.output.format.is_none());
    assert!(config.output.colored.is_none());
}

#[test]
fn test_default_extract_config() {
    let config = ExtractConfig::default();
    assert!(config.extra_stopwords.is_empty());
}

#[test]
fn test_output_config_with_format() {
    let config = OutputConfig {
        format: Some("yaml".to_string()),
        ..Default::default()
    };

    assert_eq!(config.format.as_deref(), Some("yaml"));
    assert!(config.colored.is_none());
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[extract]\nextra_stopwords = [\"WHERE\"]\n\n[output]\ncolored = false").unwrap();

    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.extract.extra_stopwords, vec!["WHERE"]);
    assert_eq!(config.output.colored, Some(false));
}

#[test]
fn test_from_file_partial_sections() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[output]\nformat = \"json\"").unwrap();

    let config = Config::from_file(file.path()).unwrap();

    assert!(config.extract.extra_stopwords.is_empty());
    assert_eq!(config.output.format.as_deref(), Some("json"));
}

#[test]
fn test_from_file_missing() {
    assert!(Config::from_file(std::path::Path::new("/nonexistent/config.toml")).is_err());
}

#[test]
fn test_from_file_invalid_toml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[output\nformat = ").unwrap();

    assert!(Config::from_file(file.path()).is_err());
}
