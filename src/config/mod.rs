//! Settings resolution
//!
//! This module resolves run settings from the environment and an optional
//! `.env` file in the project directory.

pub mod parse;
pub mod types;

// Re-export main types
pub use parse::*;
pub use types::*;
