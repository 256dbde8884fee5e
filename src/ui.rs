//! Console output
//!
//! All user-facing messages go through a [`Printer`] so that `--quiet`,
//! `--silent` and `--verbose` apply uniformly.

use crate::config::ColorMode;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Variable holding a tracing filter directive, e.g. `versioner=debug`
pub const LOG_ENV: &str = "VERSIONER_LOG";

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    #[default]
    Normal = 2,
    Verbose = 3,
}

/// Install the stderr tracing subscriber
///
/// `VERSIONER_LOG` wins; otherwise `--verbose` enables debug events.
pub fn init_tracing(verbosity: Verbosity) {
    let default = if verbosity >= Verbosity::Verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

/// Apply a color mode to all colorized output of this process
pub fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Auto => colored::control::unset_override(),
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
    }
}

/// Verbosity-gated, colorized console sink
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer {
    verbosity: Verbosity,
}

impl Printer {
    pub fn new(verbosity: Verbosity) -> Self {
        Printer { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Whether messages at `level` are shown
    pub fn enabled(&self, level: Verbosity) -> bool {
        level != Verbosity::Silent && self.verbosity >= level
    }

    /// Plain text on stdout (help and version output)
    pub fn plain(&self, message: &str) {
        if self.enabled(Verbosity::Quiet) {
            println!("{}", message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.enabled(Verbosity::Normal) {
            println!("{}", message);
        }
    }

    pub fn success(&self, message: &str) {
        if self.enabled(Verbosity::Normal) {
            println!("{}", message.green());
        }
    }

    pub fn warn(&self, message: &str) {
        if self.enabled(Verbosity::Normal) {
            eprintln!("{}", message.yellow());
        }
    }

    pub fn error(&self, message: &str) {
        if self.enabled(Verbosity::Quiet) {
            eprintln!("{}", message.red());
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn debug(&self, message: &str) {
        if self.enabled(Verbosity::Verbose) {
            eprintln!("{}", message.dimmed());
        }
    }
}
