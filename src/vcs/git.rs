//! Git command execution
//!
//! This module shells out to the git client. Output goes straight to the
//! terminal; only the exit status is inspected.

use crate::config::Settings;
use crate::error::{VcsError, VcsResult};
use std::path::PathBuf;
use std::process::{Command as StdCommand, Stdio};
use tracing::debug;

/// The operations a release needs from version control
pub trait Vcs {
    /// Stage all working tree changes
    fn stage_all(&mut self) -> VcsResult<()>;

    /// Commit staged changes
    fn commit(&mut self, message: &str) -> VcsResult<()>;

    /// Create an annotated tag
    fn tag(&mut self, name: &str, message: &str) -> VcsResult<()>;

    /// Push a single tag to a remote
    fn push_tag(&mut self, remote: &str, name: &str) -> VcsResult<()>;
}

/// [`Vcs`] backed by the git command line client
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    working_dir: PathBuf,
}

impl GitCli {
    pub fn new(program: impl Into<String>, working_dir: PathBuf) -> Self {
        GitCli {
            program: program.into(),
            working_dir,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.git_program.clone(), settings.working_dir.clone())
    }

    /// Run one git step, failing on a non-zero exit status
    fn run(&self, step: &str, args: &[&str]) -> VcsResult<()> {
        debug!(program = %self.program, ?args, "running {}", step);

        let mut command = StdCommand::new(&self.program);
        command.args(args);
        command.current_dir(&self.working_dir);

        // Set up stdio
        command.stdin(Stdio::inherit());
        command.stdout(Stdio::inherit());
        command.stderr(Stdio::inherit());

        let status = command.status().map_err(|source| VcsError::Spawn {
            step: step.to_string(),
            program: self.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(VcsError::StepFailed {
                step: step.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

impl Vcs for GitCli {
    fn stage_all(&mut self) -> VcsResult<()> {
        self.run("git add", &["add", "--all"])
    }

    fn commit(&mut self, message: &str) -> VcsResult<()> {
        self.run("git commit", &["commit", "-m", message])
    }

    fn tag(&mut self, name: &str, message: &str) -> VcsResult<()> {
        self.run("git tag", &["tag", "-a", name, "-m", message])
    }

    fn push_tag(&mut self, remote: &str, name: &str) -> VcsResult<()> {
        self.run("git push", &["push", remote, &tag_ref(name)])
    }
}

/// Fully qualified ref, so a branch with the same name is never pushed
fn tag_ref(name: &str) -> String {
    format!("refs/tags/{}", name)
}
