//! Message Analysis
//!
//! Only URLs inside the text are checked. Plain text such as
//! "send me your password" without a link is always safe.

use once_cell::sync::Lazy;
use regex::Regex;

use super::link::analyze_link;
use super::matcher::MatchEngine;
use super::types::Verdict;
use crate::constants::reasons;

/// `http://` or `https://` followed by a run of non-whitespace.
///
/// The scheme folds ASCII case only, so `ſ` (U+017F) never stands in for
/// `s`. U+FEFF ends a URL like any other whitespace.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u:https?://)[^\s\x{FEFF}]+").expect("Invalid URL pattern")
});

/// URLs in order of appearance, original casing kept
pub fn extract_urls(text: &str) -> Vec<&str> {
    URL_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Classify free text by its links. Stops at the first dangerous URL and
/// returns it as `value`.
pub fn analyze_message(engine: &MatchEngine<'_>, text: Option<&str>) -> Verdict {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return Verdict::safe(reasons::EMPTY_MESSAGE),
    };

    let urls = extract_urls(text);
    if urls.is_empty() {
        return Verdict::safe(reasons::NO_LINKS);
    }

    for url in urls {
        let verdict = analyze_link(engine, Some(url));
        if verdict.dangerous {
            log::debug!("Dangerous link in message: {} ({})", url, verdict.reason);
            return verdict.with_value(url);
        }
    }

    Verdict::safe(reasons::MESSAGE_SAFE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::intel::KnownBadCorpus;
    use crate::logic::rules::KeywordRules;

    #[test]
    fn test_extract_urls_in_order() {
        let urls = extract_urls("see https://a.example/x and HTTP://B.example?q=1, bye");
        assert_eq!(urls, vec!["https://a.example/x", "HTTP://B.example?q=1,"]);
    }

    #[test]
    fn test_extract_requires_scheme() {
        assert!(extract_urls("www.example.com and ftp://files.example").is_empty());
        assert!(extract_urls("http:// nothing").is_empty());
    }

    #[test]
    fn test_extract_stops_at_bom() {
        assert_eq!(extract_urls("see http://a.io\u{feff}tail"), vec!["http://a.io"]);
        assert_eq!(extract_urls("x\u{3000}HTTPS://Mixed.Case/\u{a0}y"), vec!["HTTPS://Mixed.Case/"]);
    }

    #[test]
    fn test_extract_scheme_ascii_case_only() {
        assert!(extract_urls("httpſ://x.io").is_empty());
        assert_eq!(extract_urls("HtTpS://x.io"), vec!["HtTpS://x.io"]);
    }

    #[test]
    fn test_empty_message() {
        let rules = KeywordRules::default();
        let corpus = KnownBadCorpus::new();
        let engine = MatchEngine::new(&rules, &corpus);
        assert_eq!(analyze_message(&engine, None), Verdict::safe("Empty message"));
        assert_eq!(analyze_message(&engine, Some("")), Verdict::safe("Empty message"));
    }

    #[test]
    fn test_text_without_links_is_safe() {
        let rules = KeywordRules::default();
        let corpus = KnownBadCorpus::new();
        let engine = MatchEngine::new(&rules, &corpus);
        let verdict = analyze_message(&engine, Some("please verify your wallet login"));
        assert_eq!(verdict, Verdict::safe("No links found"));
    }

    #[test]
    fn test_first_dangerous_link_reported() {
        let rules = KeywordRules::default();
        let corpus = KnownBadCorpus::parse("test", "evilsite.com");
        let engine = MatchEngine::new(&rules, &corpus);

        let text = "ok https://docs.rs then http://EvilSite.com/a then http://hack.io";
        let verdict = analyze_message(&engine, Some(text));
        assert_eq!(
            verdict,
            Verdict::dangerous("URL found in malicious database").with_value("http://EvilSite.com/a")
        );
    }

    #[test]
    fn test_all_links_safe() {
        let rules = KeywordRules::default();
        let corpus = KnownBadCorpus::new();
        let engine = MatchEngine::new(&rules, &corpus);
        let verdict = analyze_message(&engine, Some("docs at https://docs.rs and https://crates.io"));
        assert_eq!(verdict, Verdict::safe("Message is safe"));
    }
}
