//! Security Engine
//!
//! Public entry point. Owns the keyword rules and the known-bad corpus
//! and exposes load + analyze operations.
//!
//! # Usage
//! ```ignore
//! use security_engine::{SecurityEngine, FileDescriptor};
//!
//! let engine = SecurityEngine::new();
//! if let Err(e) = engine.load_default_corpus().await {
//!     // keyword-only until the next successful load
//! }
//! let verdict = engine.analyze_link("http://airdrop-claim.io");
//! let verdict = engine.analyze_file(&FileDescriptor::new("setup.exe"));
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use super::engine_status::{EngineMode, EngineStatus};
use crate::constants::{ENGINE_NAME, ENGINE_VERSION, SHORT_INDICATOR_LEN};
use crate::error::LoadResult;
use crate::logic::config::EngineConfig;
use crate::logic::intel::{CorpusSource, CorpusStats, KnownBadCorpus, LocationSource};
use crate::logic::rules::KeywordRules;
use crate::logic::scanner::{self, AnalysisTarget, FileDescriptor, MatchEngine, Verdict};

// ============================================================================
// SECURITY ENGINE
// ============================================================================

pub struct SecurityEngine {
    config: EngineConfig,

    /// Fixed for the engine lifetime
    keywords: KeywordRules,

    /// Swapped wholesale on each successful load, never mutated in place
    corpus: RwLock<Arc<KnownBadCorpus>>,
}

impl SecurityEngine {
    /// Engine with built-in keywords and an empty corpus
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let keywords = KeywordRules::new(&config.keywords);
        Self {
            config,
            keywords,
            corpus: RwLock::new(Arc::new(KnownBadCorpus::new())),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn keyword_rules(&self) -> &KeywordRules {
        &self.keywords
    }

    /// Current corpus. Callers keep a consistent view even if a load lands meanwhile.
    pub fn corpus(&self) -> Arc<KnownBadCorpus> {
        Arc::clone(&self.corpus.read())
    }

    // ------------------------------------------------------------------------
    // Corpus loading
    // ------------------------------------------------------------------------

    /// Fetch and install a new corpus.
    ///
    /// On failure the current corpus stays in place and the error is logged
    /// as a warning; classification keeps working. No retry is scheduled.
    pub async fn load_corpus<S: CorpusSource>(&self, source: &S) -> LoadResult<CorpusStats> {
        let label = source.label();

        match source.fetch().await {
            Ok(text) => Ok(self.replace_corpus(KnownBadCorpus::parse(label, &text))),
            Err(e) => {
                log::warn!("[Security] Failed to load corpus from {}: {}", label, e);
                Err(e)
            }
        }
    }

    /// Load from `config.corpus_location`
    pub async fn load_default_corpus(&self) -> LoadResult<CorpusStats> {
        let timeout = Duration::from_secs(self.config.fetch_timeout_secs);
        let source = LocationSource::from_location(&self.config.corpus_location, timeout)
            .inspect_err(|e| log::warn!("[Security] Corpus source unavailable: {}", e))?;

        self.load_corpus(&source).await
    }

    /// Install corpus text the host already fetched
    pub fn load_corpus_text(&self, label: impl Into<String>, text: &str) -> CorpusStats {
        self.replace_corpus(KnownBadCorpus::parse(label, text))
    }

    /// Replace the corpus in one step. Concurrent analyze calls see either the
    /// old corpus or the new one, never a mix.
    pub fn replace_corpus(&self, corpus: KnownBadCorpus) -> CorpusStats {
        let short = corpus.short_entries();
        if short > 0 {
            log::warn!(
                "[Security] {} corpus entries are shorter than {} chars and will match most input",
                short,
                SHORT_INDICATOR_LEN
            );
        }

        let stats = corpus.stats();
        *self.corpus.write() = Arc::new(corpus);

        log::info!("[Security] Malicious corpus loaded: {} entries", stats.entries);
        stats
    }

    // ------------------------------------------------------------------------
    // Analysis
    // ------------------------------------------------------------------------

    pub fn analyze_link<'a>(&self, url: impl Into<Option<&'a str>>) -> Verdict {
        let corpus = self.corpus();
        scanner::analyze_link(&MatchEngine::new(&self.keywords, &corpus), url.into())
    }

    pub fn analyze_file<'a>(&self, file: impl Into<Option<&'a FileDescriptor>>) -> Verdict {
        let corpus = self.corpus();
        scanner::analyze_file(&MatchEngine::new(&self.keywords, &corpus), file.into())
    }

    pub fn analyze_message<'a>(&self, text: impl Into<Option<&'a str>>) -> Verdict {
        let corpus = self.corpus();
        scanner::analyze_message(&MatchEngine::new(&self.keywords, &corpus), text.into())
    }

    pub fn analyze(&self, target: &AnalysisTarget) -> Verdict {
        let corpus = self.corpus();
        scanner::analyze_target(&MatchEngine::new(&self.keywords, &corpus), target)
    }

    // ------------------------------------------------------------------------
    // Status
    // ------------------------------------------------------------------------

    pub fn corpus_stats(&self) -> CorpusStats {
        self.corpus.read().stats()
    }

    pub fn status(&self) -> EngineStatus {
        let corpus = self.corpus_stats();
        let mode = if corpus.loaded {
            EngineMode::Full
        } else {
            EngineMode::KeywordOnly
        };

        EngineStatus {
            name: ENGINE_NAME.to_string(),
            version: ENGINE_VERSION.to_string(),
            keyword_rules: self.keywords.len(),
            corpus,
            mode,
        }
    }
}

impl Default for SecurityEngine {
    fn default() -> Self {
        Self::new()
    }
}
