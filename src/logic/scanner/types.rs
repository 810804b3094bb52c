//! Scanner Types
//!
//! Core types cho link/file/message scanning.
//! KHÔNG chứa logic - chỉ data structures.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::logic::intel::Indicator;

// ============================================================================
// VERDICT
// ============================================================================

/// Result of any analyze call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub dangerous: bool,
    pub reason: String,
    /// Offending URL, only set by message analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Verdict {
    pub fn safe(reason: &str) -> Self {
        Self {
            dangerous: false,
            reason: reason.to_string(),
            value: None,
        }
    }

    pub fn dangerous(reason: &str) -> Self {
        Self {
            dangerous: true,
            reason: reason.to_string(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = if self.dangerous { "dangerous" } else { "safe" };
        match &self.value {
            Some(value) => write!(f, "{}: {} ({})", label, self.reason, value),
            None => write!(f, "{}: {}", label, self.reason),
        }
    }
}

// ============================================================================
// MATCH RESULT
// ============================================================================

/// Which table produced a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    Keyword,
    Corpus,
}

impl MatchSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchSource::Keyword => "keyword",
            MatchSource::Corpus => "corpus",
        }
    }
}

impl std::fmt::Display for MatchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    NoMatch,
    Matched {
        source: MatchSource,
        /// The indicator that matched first
        indicator: Indicator,
    },
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    pub fn source(&self) -> Option<MatchSource> {
        match self {
            MatchResult::NoMatch => None,
            MatchResult::Matched { source, .. } => Some(*source),
        }
    }
}

// ============================================================================
// ANALYSIS TARGETS
// ============================================================================

/// File to analyze: a name plus whatever metadata the host attached
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    /// Size, MIME type, etc. Never inspected by the scanner.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            metadata: Map::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Anything the engine can analyze; each variant maps to one analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum AnalysisTarget {
    Link(Option<String>),
    File(Option<FileDescriptor>),
    Message(Option<String>),
}

// ============================================================================
// TESTS
// ============================================================================
