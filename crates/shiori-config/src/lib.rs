use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::history::HistoryConfig;
use self::search::SearchConfig;

pub mod dictionary;
pub mod history;
pub mod search;

const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 5000;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub history: HistoryConfig,
    pub search: SearchConfig,

    /// Longest a single dictionary search may take
    pub lookup_timeout_ms: u64,
    /// tracing filter used when RUST_LOG is unset
    pub log_filter: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("history.capacity must be at least 1")]
    InvalidHistoryCapacity,

    #[error("lookup_timeout_ms must be at least 1")]
    InvalidLookupTimeout,

    #[error("Dictionary file not found: {0}")]
    DictionaryNotFound(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            history: HistoryConfig::default(),
            search: SearchConfig::default(),
            lookup_timeout_ms: DEFAULT_LOOKUP_TIMEOUT_MS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Self::default().with_env(|key| env::var(key).ok())
    }

    /// Read a JSON profile. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlay `SHIORI_*` variables read through `get`.
    pub fn with_env(mut self, get: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(capacity) = get("SHIORI_HISTORY_CAPACITY").and_then(|v| v.parse().ok()) {
            self.history.capacity = capacity;
        }

        if let Some(timeout) = get("SHIORI_LOOKUP_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.lookup_timeout_ms = timeout;
        }

        if let Some(filter) = get("SHIORI_LOG") {
            self.log_filter = filter;
        }

        if let Some(paths) = get("SHIORI_DICTIONARY_PATHS") {
            self.dictionary.additional_paths.extend(
                paths
                    .split(';')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from),
            );
        }

        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.capacity == 0 {
            return Err(ConfigError::InvalidHistoryCapacity);
        }

        if self.lookup_timeout_ms == 0 {
            return Err(ConfigError::InvalidLookupTimeout);
        }

        if let Some(missing) = self
            .dictionary
            .additional_paths
            .iter()
            .find(|p| !Path::new(p).is_file())
        {
            return Err(ConfigError::DictionaryNotFound(missing.clone()));
        }

        Ok(())
    }
}
