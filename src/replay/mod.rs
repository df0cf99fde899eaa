//! Evolog replay
//!
//! Turns every selected evolog entry into a new change, oldest first,
//! each stacked on the previous one.

mod description;
mod engine;
mod outcome;


pub use description::{
    OPERATION_PREFIX, TIMESTAMP_PREFIX, UNKNOWN_TIMESTAMP, resolve_description,
};
pub use engine::ReplayEngine;
pub use outcome::{EntryReplayError, PlannedAction, ReplayOutcome, ReplayStage};

use thiserror::Error;

use crate::jj::JjError;
use crate::model::FilterSpec;

/// Errors that abort a replay run before any entry is touched
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("Failed to read evolog: {0}")]
    LogFetch(#[source] JjError),
}

/// Order entries are replayed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplayOrder {
    /// Oldest first (`jj evolog --reversed`)
    #[default]
    Chronological,
    /// Whatever order jj prints by default (newest first)
    AsReceived,
}

impl ReplayOrder {
    /// Whether the log must be requested oldest-first
    pub fn is_reversed(self) -> bool {
        matches!(self, ReplayOrder::Chronological)
    }

    fn label(self) -> &'static str {
        match self {
            ReplayOrder::Chronological => "chronological order",
            ReplayOrder::AsReceived => "log order",
        }
    }
}

/// Settings for one replay run
#[derive(Debug, Clone, Default)]
pub struct ReplayOptions {
    pub filter: FilterSpec,
    pub dry_run: bool,
    pub order: ReplayOrder,
    /// Change whose evolog is replayed (jj defaults to `@`)
    pub revision: Option<String>,
}
