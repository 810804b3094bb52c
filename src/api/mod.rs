//! Public API - what hosts call
//!
//! `SecurityEngine` replaces a shared global: each host builds an engine,
//! loads the corpus once at startup and calls the analyze methods.

pub mod engine;
pub mod engine_status;

pub use engine::SecurityEngine;
pub use engine_status::{EngineMode, EngineStatus};
