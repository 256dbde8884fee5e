//! Version record, manifest persistence and state transitions
//!
//! This module holds the version record and its renderings, the store that
//! loads and saves the manifest and record, and the engine that computes the
//! next state from the current one.

pub mod engine;
pub mod prompt;
pub mod store;
pub mod types;

// Re-export main types
pub use engine::*;
pub use prompt::*;
pub use store::*;
pub use types::*;
