//! User-facing output of a replay run
//!
//! Diagnostics go through `tracing`; this is the report the user asked for
//! (dry-run plan, per-entry results, and jj's own output).

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::jj::CommandOutput;

/// Sink for replay progress
pub trait Console {
    /// Plain informational line
    fn info(&mut self, line: &str);

    /// An entry was replayed
    fn success(&mut self, line: &str);

    /// An entry could not be replayed
    fn failure(&mut self, line: &str);

    /// Pass through whatever jj printed, skipping blank streams
    fn forward(&mut self, output: &CommandOutput);
}

/// Writes to the process stdout/stderr with colored status markers
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn info(&mut self, line: &str) {
        let _ = writeln!(io::stdout(), "{line}");
    }

    fn success(&mut self, line: &str) {
        let _ = writeln!(io::stdout(), "{} {line}", "✓".green());
    }

    fn failure(&mut self, line: &str) {
        let _ = writeln!(io::stderr(), "{} {line}", "✗".red());
    }

    fn forward(&mut self, output: &CommandOutput) {
        if !output.stdout.trim().is_empty() {
            let _ = io::stdout().write_all(output.stdout.as_bytes());
        }
        if !output.stderr.trim().is_empty() {
            let _ = io::stderr().write_all(output.stderr.as_bytes());
        }
    }
}

/// One line captured by [`RecordingConsole`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    Info(String),
    Success(String),
    Failure(String),
    Stdout(String),
    Stderr(String),
}

/// Captures everything in memory (tests, embedding)
#[derive(Debug, Default)]
pub struct RecordingConsole {
    pub lines: Vec<ConsoleLine>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Informational lines only, in order
    pub fn infos(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                ConsoleLine::Info(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Console for RecordingConsole {
    fn info(&mut self, line: &str) {
        self.lines.push(ConsoleLine::Info(line.to_string()));
    }

    fn success(&mut self, line: &str) {
        self.lines.push(ConsoleLine::Success(line.to_string()));
    }

    fn failure(&mut self, line: &str) {
        self.lines.push(ConsoleLine::Failure(line.to_string()));
    }

    fn forward(&mut self, output: &CommandOutput) {
        if !output.stdout.trim().is_empty() {
            self.lines.push(ConsoleLine::Stdout(output.stdout.clone()));
        }
        if !output.stderr.trim().is_empty() {
            self.lines.push(ConsoleLine::Stderr(output.stderr.clone()));
        }
    }
}
