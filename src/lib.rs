//! Versioner - version bumping for project manifests
//!
//! Versioner keeps a `major.core.minor` version in a project manifest in sync
//! with its own version record, counts builds between bumps, and can commit,
//! tag and push each new version with git.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;
pub mod vcs;
pub mod version;

// Re-export commonly used types
pub use error::{Result, VersionerError};
pub use version::{Component, Version, VersionCore};

/// Current version of Versioner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
