//! Match Engine
//!
//! CHỈ chứa logic match - deterministic substring containment.
//! Input: normalized candidate. Output: MatchResult.

use super::types::{MatchResult, MatchSource};
use crate::logic::intel::KnownBadCorpus;
use crate::logic::rules::KeywordRules;

/// Borrowed view over both indicator tables for one analyze call
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine<'a> {
    keywords: &'a KeywordRules,
    corpus: &'a KnownBadCorpus,
}

impl<'a> MatchEngine<'a> {
    pub fn new(keywords: &'a KeywordRules, corpus: &'a KnownBadCorpus) -> Self {
        Self { keywords, corpus }
    }

    /// Match an already lower-cased candidate.
    ///
    /// Order is part of the contract:
    /// 1. Keyword rules. A hit returns immediately and the corpus is not consulted,
    ///    so the keyword reason wins when both tables would match.
    /// 2. Corpus entries.
    /// 3. `NoMatch`.
    ///
    /// Matching is plain substring containment: `myverifyaccount.com` matches `verify`.
    pub fn matches(&self, candidate: &str) -> MatchResult {
        if let Some(keyword) = self.keywords.find_match(candidate) {
            log::debug!("Keyword '{}' matched '{}'", keyword, candidate);
            return MatchResult::Matched {
                source: MatchSource::Keyword,
                indicator: keyword.clone(),
            };
        }

        if let Some(entry) = self.corpus.find_match(candidate) {
            log::debug!("Corpus entry '{}' matched '{}'", entry, candidate);
            return MatchResult::Matched {
                source: MatchSource::Corpus,
                indicator: entry.clone(),
            };
        }

        MatchResult::NoMatch
    }
}

// ============================================================================
// TESTS
// ============================================================================
