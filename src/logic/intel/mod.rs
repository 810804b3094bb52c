//! Intelligence Module - Known-Bad Corpus
//!
//! # Components
//! - `types.rs`: `Indicator`, `CorpusStats`
//! - `corpus.rs`: the immutable `KnownBadCorpus`
//! - `source.rs`: `CorpusSource` trait plus HTTP/file/text sources

pub mod types;
pub mod corpus;
pub mod source;
#[cfg(test)]
pub(crate) mod test_http;

pub use types::{Indicator, CorpusStats};
pub use corpus::KnownBadCorpus;
pub use source::{CorpusSource, HttpSource, FileSource, TextSource, LocationSource};
