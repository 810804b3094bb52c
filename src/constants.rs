//! Central Configuration Constants
//!
//! Single source of truth for all engine defaults.
//! To change the default corpus feed, only edit this file.

/// Default location of the known-bad corpus.
///
/// Relative paths are read from disk, `http(s)://` locations are fetched.
pub const DEFAULT_CORPUS_LOCATION: &str = "malicious_phish.csv";

/// Default HTTP timeout when fetching the corpus (seconds)
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Indicators shorter than this are reported as a data-quality risk on load
pub const SHORT_INDICATOR_LEN: usize = 4;

/// Engine version
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name
pub const ENGINE_NAME: &str = "One-Shield Security Engine";

// ============================================
// Verdict reasons
// ============================================

pub mod reasons {
    pub const EMPTY_URL: &str = "Empty URL";
    pub const URL_KEYWORD: &str = "Malicious keyword detected in URL";
    pub const URL_CORPUS: &str = "URL found in malicious database";
    pub const URL_SAFE: &str = "URL is safe";

    pub const INVALID_FILE: &str = "Invalid file";
    pub const FILE_EXECUTABLE: &str = "Executable (.exe) files are blocked";
    pub const FILE_KEYWORD: &str = "Malicious keyword detected in filename";
    pub const FILE_CORPUS: &str = "Filename found in malicious database";
    pub const FILE_SAFE: &str = "File is safe";

    pub const EMPTY_MESSAGE: &str = "Empty message";
    pub const NO_LINKS: &str = "No links found";
    pub const MESSAGE_SAFE: &str = "Message is safe";
}
