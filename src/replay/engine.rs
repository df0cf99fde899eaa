//! Sequential replay of evolog entries

use tracing::{debug, info, warn};

use super::outcome::{EntryReplayError, PlannedAction, ReplayOutcome, ReplayStage};
use super::{ReplayError, ReplayOptions, resolve_description};
use crate::console::Console;
use crate::jj::parser::parse_evolog;
use crate::jj::{CommandRunner, EvologSource, JjCommand};
use crate::model::{BaseRef, EvologEntry};

/// Drives fetch, parse, filter and replay
///
/// Every jj call completes before the next one is issued: each new change
/// is created on top of the working copy left by the previous entry.
pub struct ReplayEngine<S, R> {
    source: S,
    runner: R,
    options: ReplayOptions,
}

impl<S: EvologSource, R: CommandRunner> ReplayEngine<S, R> {
    pub fn new(source: S, runner: R, options: ReplayOptions) -> Self {
        Self {
            source,
            runner,
            options,
        }
    }

    /// Run the whole batch
    ///
    /// Only a failure to read the evolog is returned as an error; entry
    /// failures are recorded in the outcome and the batch continues.
    pub fn run(&self, console: &mut dyn Console) -> Result<ReplayOutcome, ReplayError> {
        let raw = self
            .source
            .fetch_evolog(self.options.revision.as_deref(), self.options.order.is_reversed())
            .map_err(ReplayError::LogFetch)?;

        let entries = parse_evolog(&raw);
        debug!(count = entries.len(), "parsed evolog");

        let mut outcome = ReplayOutcome::new(self.options.dry_run);

        if entries.is_empty() {
            console.info("No evolog entries found.");
            return Ok(outcome);
        }

        let selected = self.options.filter.select(&entries);
        if !self.options.filter.is_empty() {
            info!(
                total = entries.len(),
                selected = selected.len(),
                "applied skip/pick filter"
            );
        }

        if selected.is_empty() {
            console.info("No evolog entries matched the skip/pick filter.");
            return Ok(outcome);
        }

        console.info(&format!(
            "Found {} evolog entries to process in {}.",
            selected.len(),
            self.options.order.label()
        ));

        if self.options.dry_run {
            console.info("Dry run mode - showing what would be created:");
        }

        for (index, entry) in selected.iter().enumerate() {
            let base = if index == 0 {
                BaseRef::parent_of(&entry.commit_id)
            } else {
                BaseRef::WorkingCopy
            };
            let description = resolve_description(entry);

            if self.options.dry_run {
                let action = PlannedAction {
                    commit_id: entry.commit_id.clone(),
                    base,
                    description,
                };
                console.info(&action.to_string());
                outcome.planned.push(action);
                continue;
            }

            console.info(&format!(
                "Recreating state from commit {}: {}",
                entry.commit_id, description
            ));

            match self.replay_entry(entry, base, description, console) {
                Ok(()) => {
                    console.success(&format!("Recreated state from {}", entry.commit_id));
                    outcome.record_success();
                }
                Err(error) => {
                    warn!(
                        commit_id = %entry.commit_id,
                        stage = %error.stage,
                        error = %error.source,
                        "entry replay failed"
                    );
                    console.failure(&format!(
                        "Failed to recreate state from {}: {}",
                        entry.commit_id, error.source
                    ));
                    outcome.record_failure(error);
                }
            }
        }

        info!(
            attempted = outcome.attempted,
            succeeded = outcome.succeeded,
            failed = outcome.failed,
            planned = outcome.planned.len(),
            "replay finished"
        );

        Ok(outcome)
    }

    /// Create the change, then restore the entry's content into it
    fn replay_entry(
        &self,
        entry: &EvologEntry,
        base: BaseRef,
        message: String,
        console: &mut dyn Console,
    ) -> Result<(), EntryReplayError> {
        let create = JjCommand::CreateChange { base, message };
        let output = self
            .runner
            .execute(&create)
            .map_err(|source| EntryReplayError::new(&entry.commit_id, ReplayStage::Create, source))?;
        console.forward(&output);
        debug!(commit_id = %entry.commit_id, "created change");

        let restore = JjCommand::RestoreFrom {
            commit_id: entry.commit_id.clone(),
        };
        let output = self
            .runner
            .execute(&restore)
            .map_err(|source| EntryReplayError::new(&entry.commit_id, ReplayStage::Restore, source))?;
        console.forward(&output);
        debug!(commit_id = %entry.commit_id, "restored content");

        Ok(())
    }
}
