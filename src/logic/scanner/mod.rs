//! Scanner Module
//!
//! Decides dangerous/safe for links, files and messages.
//!
//! ## Structure
//! - `types`: `Verdict`, `MatchResult`, `AnalysisTarget`, `FileDescriptor`
//! - `matcher`: keyword-then-corpus matching
//! - `link`, `file`, `message`: one analyzer per target kind
//!
//! Flow: message -> link -> matcher. File analysis sits beside link analysis
//! and uses the same matcher.

pub mod types;
pub mod matcher;
pub mod link;
pub mod file;
pub mod message;

pub use types::{Verdict, MatchSource, MatchResult, FileDescriptor, AnalysisTarget};
pub use matcher::MatchEngine;
pub use link::analyze_link;
pub use file::analyze_file;
pub use message::{analyze_message, extract_urls};

/// Route a target to its analyzer
pub fn analyze_target(engine: &MatchEngine<'_>, target: &AnalysisTarget) -> Verdict {
    match target {
        AnalysisTarget::Link(url) => analyze_link(engine, url.as_deref()),
        AnalysisTarget::File(file) => analyze_file(engine, file.as_ref()),
        AnalysisTarget::Message(text) => analyze_message(engine, text.as_deref()),
    }
}
