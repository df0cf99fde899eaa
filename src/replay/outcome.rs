//! Result of a replay run

use std::fmt;

use thiserror::Error;

use crate::jj::JjError;
use crate::model::BaseRef;

/// Which of the two jj calls for an entry failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStage {
    /// `jj new`
    Create,
    /// `jj restore --from`
    Restore,
}

impl fmt::Display for ReplayStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayStage::Create => f.write_str("create change"),
            ReplayStage::Restore => f.write_str("restore content"),
        }
    }
}

/// A single entry could not be replayed; the batch continues
#[derive(Error, Debug)]
#[error("failed to {stage} for {commit_id}: {source}")]
pub struct EntryReplayError {
    pub commit_id: String,
    pub stage: ReplayStage,
    #[source]
    pub source: JjError,
}

impl EntryReplayError {
    pub fn new(commit_id: impl Into<String>, stage: ReplayStage, source: JjError) -> Self {
        Self {
            commit_id: commit_id.into(),
            stage,
            source,
        }
    }
}

/// What a dry run would have done for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAction {
    pub commit_id: String,
    pub base: BaseRef,
    pub description: String,
}

impl fmt::Display for PlannedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Would recreate state from {} (base: {}): {}",
            self.commit_id, self.base, self.description
        )
    }
}

/// Tally of one run
///
/// `attempted` only counts entries that were actually replayed; a dry run
/// records its intended actions in `planned` instead.
#[derive(Debug, Default)]
pub struct ReplayOutcome {
    pub dry_run: bool,
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub planned: Vec<PlannedAction>,
    pub failures: Vec<EntryReplayError>,
}

impl ReplayOutcome {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// No entry failed
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    pub(crate) fn record_success(&mut self) {
        self.attempted += 1;
        self.succeeded += 1;
    }

    pub(crate) fn record_failure(&mut self, error: EntryReplayError) {
        self.attempted += 1;
        self.failed += 1;
        self.failures.push(error);
    }

    /// Final tally line
    pub fn summary(&self) -> String {
        if self.dry_run {
            format!("Dry run complete: {} changes would be created.", self.planned.len())
        } else if self.failed > 0 {
            format!(
                "Completed with {} successes and {} errors.",
                self.succeeded, self.failed
            )
        } else {
            "Done! All evolog entries have been processed.".to_string()
        }
    }
}
