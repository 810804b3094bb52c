//! Corpus Sources
//!
//! Where the known-bad feed text comes from. The engine only sees the
//! `CorpusSource` trait; hosts can plug in their own transport.
//!
//! Built-in sources:
//! - `HttpSource`: remote feed over HTTP(S)
//! - `FileSource`: local file (e.g. `malicious_phish.csv`)
//! - `TextSource`: in-memory text

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{LoadError, LoadResult};

// ============================================================================
// SOURCE TRAIT
// ============================================================================

/// Supplies raw corpus text, one indicator per line.
#[allow(async_fn_in_trait)]
pub trait CorpusSource {
    /// Human-readable label used in logs and stats
    fn label(&self) -> String;

    /// Fetch the whole feed as text
    async fn fetch(&self) -> LoadResult<String>;
}

// ============================================================================
// HTTP SOURCE
// ============================================================================

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    http_client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> LoadResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            http_client,
        })
    }

    /// Use a client the host already configured (proxy, TLS roots, headers)
    pub fn with_client(url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CorpusSource for HttpSource {
    fn label(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> LoadResult<String> {
        let response = self.http_client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::Status(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}

// ============================================================================
// FILE SOURCE
// ============================================================================

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for FileSource {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> LoadResult<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

// ============================================================================
// TEXT SOURCE
// ============================================================================

/// Feed text already in memory (tests, embedded lists, host-side fetches)
#[derive(Debug, Clone)]
pub struct TextSource {
    label: String,
    text: String,
}

impl TextSource {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

impl CorpusSource for TextSource {
    fn label(&self) -> String {
        self.label.clone()
    }

    async fn fetch(&self) -> LoadResult<String> {
        Ok(self.text.clone())
    }
}

// ============================================================================
// CONFIGURED SOURCE
// ============================================================================

/// Source picked from a configured location string
#[derive(Debug, Clone)]
pub enum LocationSource {
    Http(HttpSource),
    File(FileSource),
}

impl LocationSource {
    /// `http://` / `https://` locations are fetched, anything else is a file path
    pub fn from_location(location: &str, timeout: Duration) -> LoadResult<Self> {
        let lower = location.trim().to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(LocationSource::Http(HttpSource::new(location.trim(), timeout)?))
        } else {
            Ok(LocationSource::File(FileSource::new(location)))
        }
    }
}

impl CorpusSource for LocationSource {
    fn label(&self) -> String {
        match self {
            LocationSource::Http(source) => source.label(),
            LocationSource::File(source) => source.label(),
        }
    }

    async fn fetch(&self) -> LoadResult<String> {
        match self {
            LocationSource::Http(source) => source.fetch().await,
            LocationSource::File(source) => source.fetch().await,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
