//! jj command executor
//!
//! Handles running jj commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, warn};

use super::JjError;
use super::constants::{self, commands, errors, flags, special};
use crate::model::BaseRef;

/// Captured streams of a successful jj invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// The repository mutations the replay issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JjCommand {
    /// `jj new [<base>] -m <message>`
    CreateChange { base: BaseRef, message: String },
    /// `jj restore --from <commit_id>`
    RestoreFrom { commit_id: String },
}

impl JjCommand {
    /// Argument vector passed to jj (without global flags)
    ///
    /// A working-copy base adds no revision argument so that jj stacks the
    /// new change on top of the current position.
    pub fn args(&self) -> Vec<String> {
        match self {
            JjCommand::CreateChange { base, message } => {
                let mut args = vec![commands::NEW.to_string()];
                if let BaseRef::ParentOf(commit_id) = base {
                    args.push(format!("{commit_id}{}", special::PARENT_SUFFIX));
                }
                args.push(flags::MESSAGE.to_string());
                args.push(message.clone());
                args
            }
            JjCommand::RestoreFrom { commit_id } => vec![
                commands::RESTORE.to_string(),
                flags::FROM.to_string(),
                commit_id.clone(),
            ],
        }
    }
}

/// Provides raw `jj evolog` text
pub trait EvologSource {
    /// Fetch the graphical evolution log, oldest-first when `reversed`
    fn fetch_evolog(&self, revision: Option<&str>, reversed: bool) -> Result<String, JjError>;
}

/// Executes repository mutations
pub trait CommandRunner {
    fn execute(&self, command: &JjCommand) -> Result<CommandOutput, JjError>;
}

impl<T: EvologSource + ?Sized> EvologSource for &T {
    fn fetch_evolog(&self, revision: Option<&str>, reversed: bool) -> Result<String, JjError> {
        (**self).fetch_evolog(revision, reversed)
    }
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn execute(&self, command: &JjCommand) -> Result<CommandOutput, JjError> {
        (**self).execute(command)
    }
}

/// Executor for jj commands
#[derive(Debug, Clone)]
pub struct JjExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for JjExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl JjExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a jj command and return its stdout
    pub fn run<S: AsRef<str>>(&self, args: &[S]) -> Result<String, JjError> {
        self.run_captured(args).map(|output| output.stdout)
    }

    /// Run a jj command with the given arguments, capturing both streams
    ///
    /// Automatically adds `--color=never` to ensure parseable output.
    /// Arguments are passed as a vector, never through a shell.
    pub fn run_captured<S: AsRef<str>>(&self, args: &[S]) -> Result<CommandOutput, JjError> {
        let mut cmd = Command::new(constants::JJ_COMMAND);

        // Add repository path if specified
        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        // Always disable color for parsing
        cmd.arg(flags::NO_COLOR);

        // Add user-specified arguments
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        cmd.args(&args);

        debug!(?args, "running jj");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JjError::JjNotFound
            } else {
                JjError::IoError(e)
            }
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            Ok(CommandOutput {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr,
            })
        } else {
            let exit_code = output.status.code().unwrap_or(-1);

            // Check for common error patterns
            if stderr.contains(errors::NOT_A_REPO) {
                return Err(JjError::NotARepository);
            }

            Err(JjError::CommandFailed { stderr, exit_code })
        }
    }

    /// Get the jj version
    pub fn version(&self) -> Result<String, JjError> {
        let output = self.run(&[flags::VERSION])?;
        // Output format: "jj 0.37.0"
        let trimmed = output.trim();
        Ok(trimmed
            .strip_prefix(special::VERSION_PREFIX)
            .unwrap_or(trimmed)
            .to_string())
    }

    /// Check if jj version is supported
    pub fn check_version(&self) -> Result<(), JjError> {
        let version = self.version()?;
        if !is_version_supported(&version, constants::MIN_JJ_VERSION) {
            return Err(JjError::UnsupportedVersion {
                version,
                minimum: constants::MIN_JJ_VERSION.to_string(),
            });
        }
        Ok(())
    }

    /// Build the argument list for `jj evolog`
    fn evolog_args<'a>(revision: Option<&'a str>, reversed: bool) -> Vec<&'a str> {
        let mut args = vec![commands::EVOLOG];

        if let Some(rev) = revision {
            args.push(flags::REVISION);
            args.push(rev);
        }

        if reversed {
            args.push(flags::REVERSED);
        }

        args
    }
}

impl EvologSource for JjExecutor {
    /// Run `jj evolog`, surfacing anything printed on stderr as a warning
    fn fetch_evolog(&self, revision: Option<&str>, reversed: bool) -> Result<String, JjError> {
        let output = self.run_captured(Self::evolog_args(revision, reversed).as_slice())?;

        if !output.stderr.trim().is_empty() {
            warn!(stderr = output.stderr.trim(), "jj evolog warnings");
        }

        Ok(output.stdout)
    }
}

impl CommandRunner for JjExecutor {
    fn execute(&self, command: &JjCommand) -> Result<CommandOutput, JjError> {
        self.run_captured(command.args().as_slice())
    }
}

/// Compare version strings (simple semver comparison)
///
/// Handles prerelease suffixes like "0.37.0-rc1" by stripping the suffix.
fn is_version_supported(version: &str, minimum: &str) -> bool {
    let parse_version = |v: &str| -> Option<(u32, u32, u32)> {
        // Ignore trailing build metadata: "0.35.0 (abc123)"
        let v = v.split_whitespace().next()?;
        let parts: Vec<&str> = v.split('.').collect();
        if parts.len() >= 2 {
            let major = parts[0].parse().ok()?;
            let minor = parts[1].parse().ok()?;
            let patch = parts
                .get(2)
                .and_then(|p| p.split('-').next().and_then(|n| n.parse().ok()))
                .unwrap_or(0);
            Some((major, minor, patch))
        } else {
            None
        }
    };

    match (parse_version(version), parse_version(minimum)) {
        (Some(v), Some(m)) => v >= m,
        _ => false,
    }
}
