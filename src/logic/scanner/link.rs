//! Link Analysis

use super::matcher::MatchEngine;
use super::types::{MatchResult, MatchSource, Verdict};
use crate::constants::reasons;

/// Classify a URL.
///
/// No well-formedness check: any non-empty string is matched as-is after
/// lower-casing. Scheme and path are kept.
pub fn analyze_link(engine: &MatchEngine<'_>, url: Option<&str>) -> Verdict {
    let url = match url {
        Some(url) if !url.is_empty() => url,
        _ => return Verdict::safe(reasons::EMPTY_URL),
    };

    match engine.matches(&url.to_lowercase()) {
        MatchResult::Matched { source: MatchSource::Keyword, .. } => Verdict::dangerous(reasons::URL_KEYWORD),
        MatchResult::Matched { source: MatchSource::Corpus, .. } => Verdict::dangerous(reasons::URL_CORPUS),
        MatchResult::NoMatch => Verdict::safe(reasons::URL_SAFE),
    }
}
