//! Platform tag sources
//!
//! A platform tag is asked for only when a version record has to be derived
//! from the manifest. It can come from settings or from an interactive prompt.

use crate::error::{PromptError, PromptResult};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Supplies the platform tag prefixed onto rendered version strings
pub trait PlatformSource {
    fn platform(&mut self) -> PromptResult<String>;
}

/// A platform value fixed up front, e.g. from `VERSIONER_PLATFORM`
#[derive(Debug, Clone)]
pub struct FixedPlatform(pub String);

impl PlatformSource for FixedPlatform {
    fn platform(&mut self) -> PromptResult<String> {
        Ok(self.0.clone())
    }
}

/// Asks for the platform on a line-oriented input
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W, max_attempts: usize) -> Self {
        LinePrompt {
            input,
            output,
            max_attempts: max_attempts.max(1),
        }
    }

    fn ask(&mut self) -> PromptResult<Option<String>> {
        write!(self.output, "{}", "Write your platform: ".yellow())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer.to_string()))
        }
    }
}

impl<R: BufRead, W: Write> PlatformSource for LinePrompt<R, W> {
    fn platform(&mut self) -> PromptResult<String> {
        for attempt in 1..=self.max_attempts {
            if let Some(platform) = self.ask()? {
                return Ok(platform);
            }
            if attempt < self.max_attempts {
                writeln!(self.output, "{}", "Platform is empty, please enter one.".red())?;
            }
        }

        Err(PromptError::EmptyPlatform {
            attempts: self.max_attempts,
        })
    }
}
