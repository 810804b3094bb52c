//! Intelligence Types
//!
//! Data structures only - loading lives in `corpus.rs` and `source.rs`.

use serde::{Deserialize, Serialize};

// ============================================================================
// INDICATOR
// ============================================================================

/// A normalized (trimmed, lower-cased) non-empty pattern.
///
/// Used for both keyword rules and corpus entries. Matching is always
/// substring containment against an already lower-cased candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Indicator(String);

impl Indicator {
    /// Normalize raw text into an indicator. Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring containment. `candidate` must already be lower-cased.
    pub fn is_contained_in(&self, candidate: &str) -> bool {
        candidate.contains(self.0.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Indicator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Indicator::new(&raw).ok_or_else(|| serde::de::Error::custom("indicator must not be blank"))
    }
}

// ============================================================================
// CORPUS STATS
// ============================================================================

/// Snapshot of the corpus state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub entries: usize,
    pub loaded: bool,
    /// Unix seconds of the last successful load
    pub last_loaded: Option<i64>,
    pub source: Option<String>,
}
