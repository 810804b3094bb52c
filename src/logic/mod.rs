//! Logic Module - Scanning Engines
//!
//! - `rules` - compiled-in keyword list
//! - `intel/` - known-bad corpus and its sources
//! - `scanner/` - matcher and link/file/message analyzers
//! - `config` - engine configuration

pub mod config;
pub mod rules;
pub mod intel;
pub mod scanner;
