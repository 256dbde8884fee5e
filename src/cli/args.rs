//! Command line token scanning
//!
//! Flags are looked up by token anywhere in the argument list. A flag's value
//! is simply the token that follows it. Unknown tokens are ignored.

use crate::ui::Verbosity;
use crate::version::Component;

pub const MAJOR: &str = "--major";
pub const CORE: &str = "--core";
pub const MINOR: &str = "--minor";
pub const GIT: &str = "git";
pub const RC: &str = "--rc";
pub const PUSH: &str = "--push";
pub const HELP: &str = "--help";
pub const VERSION_SHORT: &str = "-v";
pub const VERSION_LONG: &str = "--version";
pub const QUIET: &str = "--quiet";
pub const SILENT: &str = "--silent";
pub const VERBOSE: &str = "--verbose";

/// A flag found in the invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag<'a> {
    pub name: &'a str,
    /// The token immediately after the flag, if any
    pub value: Option<&'a str>,
}

/// The arguments of one invocation, without the program name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Arguments of the running process
    pub fn from_env() -> Self {
        Self::new(std::env::args().skip(1))
    }

    /// Find the first occurrence of `name` and the token after it
    pub fn find(&self, name: &str) -> Option<Flag<'_>> {
        let index = self.args.iter().position(|arg| arg == name)?;
        Some(Flag {
            name: &self.args[index],
            value: self.args.get(index + 1).map(String::as_str),
        })
    }

    pub fn has(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn wants_help(&self) -> bool {
        self.has(HELP)
    }

    pub fn wants_version(&self) -> bool {
        self.has(VERSION_SHORT) || self.has(VERSION_LONG)
    }

    /// Components requested for bumping
    pub fn bumps(&self) -> Vec<Component> {
        Component::ALL
            .into_iter()
            .filter(|component| self.has(component.flag()))
            .collect()
    }

    /// The `git` subcommand and its commit message, if present
    pub fn git(&self) -> Option<Flag<'_>> {
        self.find(GIT)
    }

    pub fn release_candidate(&self) -> bool {
        self.has(RC)
    }

    pub fn push(&self) -> bool {
        self.has(PUSH)
    }

    /// Verbosity requested on the command line
    pub fn verbosity(&self) -> Verbosity {
        if self.has(SILENT) {
            Verbosity::Silent
        } else if self.has(QUIET) {
            Verbosity::Quiet
        } else if self.has(VERBOSE) {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}
