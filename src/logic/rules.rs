//! Keyword Rules
//!
//! Compiled-in suspicious substrings. Checked before the corpus.
//! KHÔNG chứa logic match - chỉ danh sách keyword.

use super::intel::Indicator;

// ============================================================================
// DEFAULT KEYWORDS
// ============================================================================

/// Default suspicious substrings
pub const MALICIOUS_KEYWORDS: &[&str] = &[
    "free-money",
    "crypto",
    "wallet",
    "airdrop",
    "hack",
    "keygen",
    "crack",
    "stealer",
    "trojan",
    "virus",
    "malware",
    "login",
    "verify",
    "update-now",
    "secure-now",
];

/// Special-cased extension, checked before keywords for filenames
pub const BLOCKED_EXTENSION: &str = ".exe";

// ============================================================================
// KEYWORD RULES
// ============================================================================

/// Ordered, immutable keyword set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRules {
    keywords: Vec<Indicator>,
}

impl KeywordRules {
    /// Build from raw strings. Blank entries are dropped.
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: raw
                .into_iter()
                .filter_map(|k| Indicator::new(k.as_ref()))
                .collect(),
        }
    }

    /// First keyword contained in `candidate` (already lower-cased)
    pub fn find_match(&self, candidate: &str) -> Option<&Indicator> {
        self.keywords.iter().find(|k| k.is_contained_in(candidate))
    }

    pub fn keywords(&self) -> &[Indicator] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for KeywordRules {
    fn default() -> Self {
        Self::new(MALICIOUS_KEYWORDS)
    }
}
