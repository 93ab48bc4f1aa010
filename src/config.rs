//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-schema-parser.toml` in current directory
//! 4. `~/.config/sql-schema-parser/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [extract]
//! extra_stopwords = ["WHERE", "AND", "NULL"]
//!
//! [output]
//! format = "json"              # text, json, yaml
//! colored = false
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_SCHEMA_PARSER_STOPWORDS` | Comma-separated extra stopwords |
//! | `SQL_SCHEMA_PARSER_FORMAT` | Output format |
//! | `NO_COLOR` | Disable colored output |

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

pub const STOPWORDS_ENV: &str = "SQL_SCHEMA_PARSER_STOPWORDS";
pub const FORMAT_ENV: &str = "SQL_SCHEMA_PARSER_FORMAT";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub output:  OutputConfig
}

/// Extraction configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ExtractConfig {
    /// Words added to the built-in stoplist
    #[serde(default)]
    pub extra_stopwords: Vec<String>
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    pub format:  Option<String>,
    pub colored: Option<bool>
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sql-schema-parser.toml)
    /// 3. Config file in home directory (~/.config/sql-schema-parser/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-schema-parser")
                .join("config.toml");

            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        // Current directory config replaces the home one
        let local_config = PathBuf::from(".sql-schema-parser.toml");
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    /// Read and parse a TOML config file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        tracing::debug!(path = %path.display(), "loading config file");
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }

    /// Override fields from environment variables resolved by `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>
    {
        if let Some(words) = lookup(STOPWORDS_ENV) {
            self.extract.extra_stopwords.extend(
                words
                    .split(',')
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(String::from)
            );
        }

        if let Some(format) = lookup(FORMAT_ENV) {
            self.output.format = Some(format);
        }

        if lookup(NO_COLOR_ENV).is_some() {
            self.output.colored = Some(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_toml_str_full() {
        let config = Config::from_toml_str(
            r#"
            [extract]
            extra_stopwords = ["WHERE", "AND"]

            [output]
            format = "json"
            colored = false
            "#
        )
        .unwrap();
        assert_eq!(config.extract.extra_stopwords, vec!["WHERE", "AND"]);
        assert_eq!(config.output.format.as_deref(), Some("json"));
        assert_eq!(config.output.colored, Some(false));
    }

    #[test]
    fn test_from_toml_str_empty() {
        let config = Config::from_toml_str("").unwrap();
        assert!(config.extract.extra_stopwords.is_empty());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_from_toml_str_invalid() {
        assert!(Config::from_toml_str("[extract\nextra_stopwords = 1").is_err());
        assert!(Config::from_toml_str("[extract]\nextra_stopwords = 1").is_err());
    }

    #[test]
    fn test_apply_env_appends_stopwords() {
        let mut config = Config::default();
        config.extract.extra_stopwords.push("WHERE".to_string());
        config.apply_env(env_of(&[(STOPWORDS_ENV, "AND, NULL,,")]));
        assert_eq!(config.extract.extra_stopwords, vec!["WHERE", "AND", "NULL"]);
    }

    #[test]
    fn test_apply_env_format_and_color() {
        let mut config = Config::default();
        config.apply_env(env_of(&[(FORMAT_ENV, "yaml"), (NO_COLOR_ENV, "1")]));
        assert_eq!(config.output.format.as_deref(), Some("yaml"));
        assert_eq!(config.output.colored, Some(false));
    }

    #[test]
    fn test_apply_env_nothing_set() {
        let mut config = Config::default();
        config.apply_env(|_| None);
        assert!(config.output.format.is_none());
        assert!(config.output.colored.is_none());
    }
}
