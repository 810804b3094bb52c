//! File Analysis
//!
//! Only the filename is inspected. `.exe` is the single blocked extension;
//! other executable types (`.bat`, `.scr`, `.js`) go through keyword and
//! corpus matching like any other name.

use super::matcher::MatchEngine;
use super::types::{FileDescriptor, MatchResult, MatchSource, Verdict};
use crate::constants::reasons;
use crate::logic::rules::BLOCKED_EXTENSION;

pub fn analyze_file(engine: &MatchEngine<'_>, file: Option<&FileDescriptor>) -> Verdict {
    let name = match file.and_then(|f| f.name.as_deref()) {
        Some(name) if !name.is_empty() => name,
        _ => return Verdict::safe(reasons::INVALID_FILE),
    };

    let filename = name.to_lowercase();

    // Extension check runs before keyword/corpus matching
    if filename.ends_with(BLOCKED_EXTENSION) {
        return Verdict::dangerous(reasons::FILE_EXECUTABLE);
    }

    match engine.matches(&filename) {
        MatchResult::Matched { source: MatchSource::Keyword, .. } => Verdict::dangerous(reasons::FILE_KEYWORD),
        MatchResult::Matched { source: MatchSource::Corpus, .. } => Verdict::dangerous(reasons::FILE_CORPUS),
        MatchResult::NoMatch => Verdict::safe(reasons::FILE_SAFE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::intel::KnownBadCorpus;
    use crate::logic::rules::KeywordRules;

    fn verdict_for(file: Option<&FileDescriptor>, corpus: &KnownBadCorpus) -> Verdict {
        let rules = KeywordRules::default();
        analyze_file(&MatchEngine::new(&rules, corpus), file)
    }

    #[test]
    fn test_invalid_file() {
        let corpus = KnownBadCorpus::new();
        assert_eq!(verdict_for(None, &corpus), Verdict::safe("Invalid file"));
        assert_eq!(verdict_for(Some(&FileDescriptor::default()), &corpus), Verdict::safe("Invalid file"));
        assert_eq!(verdict_for(Some(&FileDescriptor::new("")), &corpus), Verdict::safe("Invalid file"));
    }

    #[test]
    fn test_exe_blocked_case_insensitive() {
        let corpus = KnownBadCorpus::new();
        let verdict = verdict_for(Some(&FileDescriptor::new("SETUP.EXE")), &corpus);
        assert_eq!(verdict, Verdict::dangerous("Executable (.exe) files are blocked"));
    }

    #[test]
    fn test_exe_wins_over_keyword() {
        let corpus = KnownBadCorpus::new();
        let verdict = verdict_for(Some(&FileDescriptor::new("keygen.exe")), &corpus);
        assert_eq!(verdict.reason, "Executable (.exe) files are blocked");
    }

    #[test]
    fn test_exe_not_at_end() {
        let corpus = KnownBadCorpus::new();
        let verdict = verdict_for(Some(&FileDescriptor::new("notes.exe.txt")), &corpus);
        assert_eq!(verdict, Verdict::safe("File is safe"));
    }

    #[test]
    fn test_other_executables_not_special() {
        let corpus = KnownBadCorpus::new();
        for name in ["install.bat", "screensaver.scr", "loader.js"] {
            let verdict = verdict_for(Some(&FileDescriptor::new(name)), &corpus);
            assert_eq!(verdict, Verdict::safe("File is safe"), "{}", name);
        }
    }

    #[test]
    fn test_keyword_in_filename() {
        let corpus = KnownBadCorpus::new();
        let verdict = verdict_for(Some(&FileDescriptor::new("Photoshop_Crack.zip")), &corpus);
        assert_eq!(verdict, Verdict::dangerous("Malicious keyword detected in filename"));
    }

    #[test]
    fn test_corpus_filename() {
        let corpus = KnownBadCorpus::parse("test", "invoice_8812.pdf");
        let file = FileDescriptor::new("Invoice_8812.PDF").with_metadata("size", 20480);
        let verdict = verdict_for(Some(&file), &corpus);
        assert_eq!(verdict, Verdict::dangerous("Filename found in malicious database"));
    }
}
