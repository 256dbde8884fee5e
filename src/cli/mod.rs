//! CLI interface and argument scanning
//!
//! This module scans the command line for recognized tokens, prints help and
//! version text, and wires settings, prompt and git into an [`App`] run.

pub mod app;
pub mod args;

// Re-export main types
pub use app::*;
pub use args::*;

use crate::config::load_settings;
use crate::error::Result;
use crate::ui::{apply_color_mode, init_tracing, Printer};
use crate::vcs::GitCli;
use crate::version::{FixedPlatform, LinePrompt, PlatformSource};
use std::io;

/// Run the CLI application with the process arguments
pub fn run() -> Result<()> {
    let invocation = Invocation::from_env();
    let printer = Printer::new(invocation.verbosity());
    init_tracing(printer.verbosity());

    // Help and version never touch the project files
    if invocation.wants_help() {
        printer.plain(&help_text());
        return Ok(());
    }
    if invocation.wants_version() {
        printer.plain(&version_text());
        return Ok(());
    }

    let settings = load_settings()?;
    apply_color_mode(settings.color);

    let mut platform: Box<dyn PlatformSource> = match &settings.platform {
        Some(platform) => Box::new(FixedPlatform(platform.clone())),
        None => Box::new(LinePrompt::new(
            io::stdin().lock(),
            io::stdout(),
            settings.prompt_attempts,
        )),
    };
    let mut git = GitCli::from_settings(&settings);

    App::new(invocation, settings).execute(platform.as_mut(), &mut git)?;
    Ok(())
}
