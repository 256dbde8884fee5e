//! Settings types

use std::path::PathBuf;

/// Default manifest file name
pub const DEFAULT_MANIFEST_FILE: &str = "package.json";

/// Default version record file name
pub const DEFAULT_RECORD_FILE: &str = "version.json";

/// Default remote that tags are pushed to
pub const DEFAULT_REMOTE: &str = "origin";

/// Default version control client
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Default number of blank platform answers accepted before giving up
pub const DEFAULT_PROMPT_ATTEMPTS: usize = 3;

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Let the terminal and `NO_COLOR`/`CLICOLOR` decide
    #[default]
    Auto,
    Always,
    Never,
}

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the manifest and version record
    pub working_dir: PathBuf,

    /// Manifest file name, relative to the working directory
    pub manifest_file: String,

    /// Version record file name, relative to the working directory
    pub record_file: String,

    /// Platform tag to use instead of prompting
    pub platform: Option<String>,

    /// Remote that `--push` pushes tags to
    pub remote: String,

    /// Version control client program
    pub git_program: String,

    /// Color output mode
    pub color: ColorMode,

    /// Blank platform answers accepted before giving up
    pub prompt_attempts: usize,
}

impl Settings {
    /// Default settings for a working directory
    pub fn new(working_dir: PathBuf) -> Self {
        Settings {
            working_dir,
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            record_file: DEFAULT_RECORD_FILE.to_string(),
            platform: None,
            remote: DEFAULT_REMOTE.to_string(),
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            color: ColorMode::Auto,
            prompt_attempts: DEFAULT_PROMPT_ATTEMPTS,
        }
    }

    /// Set the platform tag
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.working_dir.join(&self.manifest_file)
    }

    pub fn record_path(&self) -> PathBuf {
        self.working_dir.join(&self.record_file)
    }
}
