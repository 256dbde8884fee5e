//! Main CLI application

use crate::cli::args::Invocation;
use crate::config::Settings;
use crate::error::Result;
use crate::ui::Printer;
use crate::vcs::{publish, Release, ReleaseRequest, Vcs};
use crate::version::{advance, PlatformSource, Version, VersionStore};
use clap::{crate_description, Arg, ArgAction, Command};
use colored::Colorize;

/// Program name shown in help and version output
pub const NAME: &str = "versioner";

/// What a run did
#[derive(Debug, Clone)]
pub struct Report {
    /// The record that was persisted
    pub version: Version,
    /// Whether the record was derived from the manifest on this run
    pub derived: bool,
    /// The published release, when `git` was requested
    pub release: Option<Release>,
}

/// CLI application
pub struct App {
    invocation: Invocation,
    settings: Settings,
    printer: Printer,
}

impl App {
    pub fn new(invocation: Invocation, settings: Settings) -> Self {
        let printer = Printer::new(invocation.verbosity());
        App {
            invocation,
            settings,
            printer,
        }
    }

    /// Load, advance and persist the version, then publish if requested
    pub fn execute(
        &self,
        platform: &mut dyn PlatformSource,
        vcs: &mut dyn Vcs,
    ) -> Result<Report> {
        let store = VersionStore::from_settings(&self.settings);
        let state = store.load()?;

        let next = advance(&state, &self.invocation.bumps(), platform)?;
        if let Some(stale) = &next.discarded {
            self.printer.warn(&format!(
                "Version record {} no longer matches manifest version {}, re-derived it",
                stale.plain(),
                state.manifest.version()?
            ));
        }

        store.save(&next.manifest, &next.record)?;
        self.printer
            .info(&format!("Your version: {}", next.record.release().green()));

        let release = self.release(vcs, &next.record)?;

        Ok(Report {
            version: next.record,
            derived: next.derived,
            release,
        })
    }

    /// Run the `git` subcommand, if it was given
    fn release(&self, vcs: &mut dyn Vcs, version: &Version) -> Result<Option<Release>> {
        let git = match self.invocation.git() {
            Some(git) => git,
            None => {
                if self.invocation.push() {
                    self.printer.debug("--push has no effect without git");
                }
                return Ok(None);
            }
        };

        let request = ReleaseRequest::new(
            git.value,
            self.invocation.release_candidate(),
            self.invocation.push(),
        )?;
        let release = publish(vcs, &request, version, &self.settings.remote)?;

        self.printer.success(&format!("Tagged {}", release.tag));
        if let Some(remote) = &release.pushed_to {
            self.printer
                .success(&format!("Pushed {} to {}", release.tag, remote));
        }

        Ok(Some(release))
    }
}

/// Build the clap command used to render help and version text
pub fn build_command() -> Command {
    Command::new(NAME)
        .version(crate::VERSION)
        .about(crate_description!())
        .override_usage(format!(
            "{} [--major] [--core] [--minor] [git <MESSAGE> [--rc] [--push]]",
            NAME
        ))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .disable_help_subcommand(true)
        .arg(
            Arg::new("major")
                .long("major")
                .help("Bump the major version and reset the build number")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("core")
                .long("core")
                .help("Bump the core version and reset the build number")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("minor")
                .long("minor")
                .help("Bump the minor version and reset the build number")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("rc")
                .long("rc")
                .help("With git: tag as a release candidate ({platform}{version}-rc{build})")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("push")
                .long("push")
                .help("With git: push the new tag to the remote")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Only print errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("help")
                .long("help")
                .help("Print help")
                .action(ArgAction::Help),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version")
                .action(ArgAction::Version),
        )
        .subcommand(
            Command::new("git")
                .about("Stage all changes, commit with MESSAGE and tag the new version")
                .arg(
                    Arg::new("message")
                        .value_name("MESSAGE")
                        .help("Commit and tag message"),
                ),
        )
}

/// Usage summary printed by `--help`
pub fn help_text() -> String {
    build_command().render_help().to_string()
}

/// `versioner <version>`, printed by `-v`/`--version`
pub fn version_text() -> String {
    build_command().render_version().trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_command() {
        build_command().debug_assert();
    }

    #[test]
    fn test_help_lists_flags() {
        let help = help_text();
        for token in ["--major", "--core", "--minor", "git", "--rc", "--push", "--help", "--version"] {
            assert!(help.contains(token), "help is missing {}", token);
        }
    }

    #[test]
    fn test_version_text() {
        assert_eq!(version_text(), format!("versioner {}", crate::VERSION));
    }
}
