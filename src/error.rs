//! Error handling

use std::path::PathBuf;

use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

/// Failure while loading the known-bad corpus.
///
/// Never fatal: the engine keeps its previous corpus and keeps classifying.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Corpus source returned HTTP {0}")]
    Status(u16),

    #[error("Corpus body is not valid text: {0}")]
    Decode(String),

    #[error("Failed to read corpus file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure while building an [`EngineConfig`](crate::logic::config::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_body() {
            LoadError::Decode(err.to_string())
        } else {
            LoadError::Network(err.to_string())
        }
    }
}
