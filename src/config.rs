use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use festival_calendar::Language;
use serde::Deserialize;
use tracing::debug;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "festival-calendar.toml";

/// Top-level configuration.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Festival catalog JSON file.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Language for tithi labels.
    #[serde(default)]
    pub language: Language,
}

impl AppConfig {
    /// Reads `path`, or the default file when `path` is `None`.
    ///
    /// A missing default file yields the default config; a missing file that
    /// was named explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };

        if !explicit && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::parse(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }

    pub fn parse(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = AppConfig::parse(
            r#"
            catalog = "festivals_2026.json"
            language = "hi"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("festivals_2026.json")));
        assert_eq!(config.language, Language::Hi);
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        assert_eq!(AppConfig::parse("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(AppConfig::parse("theme = \"dark\"").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_language() {
        assert!(AppConfig::parse("language = \"fr\"").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/festival-calendar.toml")));
        assert!(result.is_err());
    }
}
