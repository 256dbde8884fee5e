//! Error types for Versioner

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Versioner operations
pub type Result<T> = std::result::Result<T, VersionerError>;

/// Main error type for Versioner
#[derive(Error, Debug)]
pub enum VersionerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Manifest and version record persistence errors
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Version string errors
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// Platform prompt errors
    #[error("Platform prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// Version control errors
    #[error("Git error: {0}")]
    Vcs(#[from] VcsError),
}

/// Settings resolution errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Failed to get current directory: {0}")]
    WorkingDir(io::Error),
}

/// Manifest and version record persistence errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Error reading file {path}: {source}")]
    ManifestRead { path: PathBuf, source: io::Error },

    #[error("Error parsing file {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Manifest {0} is not a JSON object")]
    ManifestNotObject(PathBuf),

    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Errors in the manifest's plain version string
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    #[error("Manifest has no \"version\" string field")]
    MissingVersion,

    #[error("'{0}' is not a major.core.minor version")]
    Malformed(String),

    #[error("Cannot increment {0}: already at the largest supported value")]
    Overflow(String),
}

/// Platform prompt errors
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Platform is empty after {attempts} attempt(s)")]
    EmptyPlatform { attempts: usize },

    #[error("Input closed before a platform was entered")]
    InputClosed,

    #[error("Failed to read platform: {0}")]
    Io(#[from] io::Error),
}

/// Version control errors
#[derive(Error, Debug)]
pub enum VcsError {
    #[error("Git command doesn't have a commit message: versioner git \"COMMIT_MESSAGE\"")]
    MissingCommitMessage,

    #[error("Failed to start '{program}' for {step}: {source}")]
    Spawn {
        step: String,
        program: String,
        source: io::Error,
    },

    #[error("{step} failed with exit code {code:?}")]
    StepFailed { step: String, code: Option<i32> },
}

/// Specialized result type for settings resolution
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Specialized result type for version parsing
pub type VersionResult<T> = std::result::Result<T, VersionError>;

/// Specialized result type for platform prompting
pub type PromptResult<T> = std::result::Result<T, PromptError>;

/// Specialized result type for version control operations
pub type VcsResult<T> = std::result::Result<T, VcsError>;

