use serde::{Deserialize, Serialize};

use crate::logic::intel::CorpusStats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStatus {
    pub name: String,
    pub version: String,
    pub keyword_rules: usize,
    pub corpus: CorpusStats,
    pub mode: EngineMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineMode {
    /// No corpus loaded yet (or every load failed): keywords only
    KeywordOnly,
    /// Keywords plus a loaded corpus
    Full,
}
