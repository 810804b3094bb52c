//! Known-Bad Corpus
//!
//! Holds the known-bad indicators loaded from an external feed.
//! A corpus is immutable once built; a reload produces a new corpus
//! that replaces the old one wholesale.

use chrono::{DateTime, Utc};

use super::types::{CorpusStats, Indicator};
use crate::constants::SHORT_INDICATOR_LEN;

// ============================================================================
// KNOWN-BAD CORPUS
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct KnownBadCorpus {
    /// Indicators in feed order
    entries: Vec<Indicator>,

    /// Time of the successful load that produced this corpus
    loaded_at: Option<DateTime<Utc>>,

    /// Where the entries came from
    source: Option<String>,
}

impl KnownBadCorpus {
    /// Empty, not-loaded corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a loaded corpus from feed text.
    ///
    /// One indicator per line: trimmed, lower-cased, blank lines dropped.
    /// Every other line is kept as an opaque pattern. A leading UTF-8 BOM
    /// (common in CSV exports) is dropped.
    pub fn parse(source: impl Into<String>, content: &str) -> Self {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        Self::from_indicators(source, content.split('\n').filter_map(Indicator::new))
    }

    pub fn from_indicators<I>(source: impl Into<String>, indicators: I) -> Self
    where
        I: IntoIterator<Item = Indicator>,
    {
        Self {
            entries: indicators.into_iter().collect(),
            loaded_at: Some(Utc::now()),
            source: Some(source.into()),
        }
    }

    /// First indicator contained in `candidate` (already lower-cased)
    pub fn find_match(&self, candidate: &str) -> Option<&Indicator> {
        self.entries.iter().find(|entry| entry.is_contained_in(candidate))
    }

    pub fn contains_match(&self, candidate: &str) -> bool {
        self.find_match(candidate).is_some()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Indicator] {
        &self.entries
    }

    /// Entries short enough to match a large share of all input (e.g. "com")
    pub fn short_entries(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.len() < SHORT_INDICATOR_LEN)
            .count()
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            entries: self.entries.len(),
            loaded: self.is_loaded(),
            last_loaded: self.loaded_at.map(|t| t.timestamp()),
            source: self.source.clone(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
