//! Engine Configuration
//!
//! Keyword list and corpus location are fixed when the engine is built.
//! Nothing here is read from the environment; the host supplies the values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CORPUS_LOCATION, DEFAULT_FETCH_TIMEOUT_SECS};
use crate::error::ConfigError;
use crate::logic::rules::MALICIOUS_KEYWORDS;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Suspicious substrings, checked before the corpus
    pub keywords: Vec<String>,

    /// File path or `http(s)://` URL of the known-bad corpus
    pub corpus_location: String,

    /// HTTP timeout for corpus fetches (seconds)
    pub fetch_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            keywords: MALICIOUS_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            corpus_location: DEFAULT_CORPUS_LOCATION.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl EngineConfig {
    /// Parse config from JSON. Missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.corpus_location.trim().is_empty() {
            return Err(ConfigError::Invalid("corpus_location is empty".to_string()));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::Invalid("fetch_timeout_secs must be > 0".to_string()));
        }
        Ok(())
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_corpus_location(mut self, location: impl Into<String>) -> Self {
        self.corpus_location = location.into();
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
