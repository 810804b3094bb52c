//! One-Shield Security Engine
//!
//! Heuristic scanner for links, files and chat messages. Content is flagged
//! when it contains a built-in suspicious keyword or an entry from a
//! known-bad corpus loaded at startup. Matching is deterministic substring
//! containment; there is no scoring and no learning.

pub mod api;
pub mod constants;
pub mod error;
pub mod logic;

pub use api::{EngineMode, EngineStatus, SecurityEngine};
pub use error::{ConfigError, LoadError, LoadResult};
pub use logic::config::EngineConfig;
pub use logic::intel::{
    CorpusSource, CorpusStats, FileSource, HttpSource, Indicator, KnownBadCorpus, LocationSource,
    TextSource,
};
pub use logic::rules::{KeywordRules, MALICIOUS_KEYWORDS};
pub use logic::scanner::{AnalysisTarget, FileDescriptor, MatchEngine, MatchResult, MatchSource, Verdict};
