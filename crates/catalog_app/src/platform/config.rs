use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use catalog_core::{Settings, SEARCH_DEBOUNCE};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use super::logging::{LogDestination, DEFAULT_LOG_FILE};

const DEFAULT_PREFERENCES: &str = ".catalog_prefs.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Ron {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid base url {0:?}: {1}")]
    BaseUrl(String, url::ParseError),
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub destination: LogDestination,
    pub file: PathBuf,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            destination: LogDestination::Terminal,
            file: PathBuf::from(DEFAULT_LOG_FILE),
            level: "warn".to_string(),
        }
    }
}

/// Application configuration, read from a RON file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Data file used when `--data` is not given.
    pub data: Option<PathBuf>,
    /// Where the theme preference is stored.
    pub preferences: PathBuf,
    /// Page address that relative record links resolve against.
    pub base_url: Option<String>,
    pub search_debounce_ms: u64,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: None,
            preferences: PathBuf::from(DEFAULT_PREFERENCES),
            base_url: None,
            search_debounce_ms: u64::try_from(SEARCH_DEBOUNCE.as_millis()).unwrap_or(u64::MAX),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&text).map_err(|source| ConfigError::Ron {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log.level)
            .map_err(|_| ConfigError::LogLevel(self.log.level.clone()))
    }

    /// Core settings; `base_url` overrides the configured page address.
    pub fn settings(&self, base_url: Option<&str>) -> Result<Settings, ConfigError> {
        let base_url = match base_url.or(self.base_url.as_deref()) {
            Some(raw) => {
                Some(Url::parse(raw).map_err(|err| ConfigError::BaseUrl(raw.to_string(), err))?)
            }
            None => None,
        };
        Ok(Settings {
            base_url,
            search_debounce: Duration::from_millis(self.search_debounce_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: AppConfig = ron::from_str("(search_debounce_ms: 40)").unwrap();
        assert_eq!(config.search_debounce_ms, 40);
        assert_eq!(config.preferences, PathBuf::from(DEFAULT_PREFERENCES));
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn default_debounce_matches_core() {
        let settings = AppConfig::default().settings(None).unwrap();
        assert_eq!(settings.search_debounce, SEARCH_DEBOUNCE);
        assert!(settings.base_url.is_none());
    }

    #[test]
    fn nested_log_section() {
        let config: AppConfig =
            ron::from_str(r#"(log: (destination: both, level: "debug"))"#).unwrap();
        assert_eq!(config.log.destination, LogDestination::Both);
        assert_eq!(config.log.file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);

        let bad = AppConfig {
            log: LogConfig {
                level: "loud".into(),
                ..LogConfig::default()
            },
            ..AppConfig::default()
        };
        assert!(matches!(bad.level_filter(), Err(ConfigError::LogLevel(_))));
    }

    #[test]
    fn flag_base_url_wins() {
        let config = AppConfig {
            base_url: Some("https://a.example/".into()),
            ..AppConfig::default()
        };
        let settings = config.settings(Some("https://b.example/site/")).unwrap();
        assert_eq!(
            settings.base_url.map(String::from),
            Some("https://b.example/site/".to_string())
        );
        assert!(config.settings(Some("not a url")).is_err());
    }
}
