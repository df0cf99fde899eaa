//! jj-specific constants
//!
//! Centralized definitions for jj command names, flags, and special values.

/// jj command binary name
pub const JJ_COMMAND: &str = "jj";

/// Minimum supported jj version
pub const MIN_JJ_VERSION: &str = "0.20.0";

/// jj subcommands
pub mod commands {
    pub const EVOLOG: &str = "evolog";
    pub const NEW: &str = "new";
    pub const RESTORE: &str = "restore";
}

/// jj command flags
pub mod flags {
    /// Disable color output for parsing (global flag, safe for all commands)
    pub const NO_COLOR: &str = "--color=never";
    /// Oldest-first ordering for `jj evolog`
    pub const REVERSED: &str = "--reversed";
    /// Specify revision/revset
    pub const REVISION: &str = "-r";
    /// Specify repository path
    pub const REPO_PATH: &str = "-R";
    /// Set the description of a new change
    pub const MESSAGE: &str = "-m";
    /// Source revision for `jj restore`
    pub const FROM: &str = "--from";
    /// Show version
    pub const VERSION: &str = "--version";
}

/// Special jj values
pub mod special {
    /// Revset suffix selecting the parent(s) of a revision
    pub const PARENT_SUFFIX: &str = "-";

    /// Revset symbol for the working-copy change
    pub const WORKING_COPY: &str = "@";

    /// Placeholder jj prints for a change without a description
    pub const NO_DESCRIPTION: &str = "(no description set)";

    /// Placeholder jj prints for an empty change without a description
    pub const EMPTY_NO_DESCRIPTION: &str = "(empty) (no description set)";

    /// Version output prefix (e.g., "jj 0.37.0")
    pub const VERSION_PREFIX: &str = "jj ";
}

/// Error detection patterns in jj output
pub mod errors {
    /// Pattern indicating not a jj repository
    pub const NOT_A_REPO: &str = "There is no jj repo";
}
