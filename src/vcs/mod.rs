//! Version control integration
//!
//! Staging, committing, tagging and pushing a release through a narrow
//! [`Vcs`] interface. The git command line client is the production
//! implementation.

pub mod git;
pub mod release;

// Re-export main types
pub use git::*;
pub use release::*;
