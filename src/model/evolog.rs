//! Evolution log entry model

use std::collections::BTreeSet;

/// A single recorded state in the evolution log of a change
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EvologEntry {
    /// Commit ID of this snapshot (changes with each rewrite)
    pub commit_id: String,
    /// Change ID (stays the same)
    pub change_id: String,
    /// Author as printed by jj (usually an email)
    pub author: String,
    /// Timestamp as printed by jj, no timezone normalization
    pub timestamp: String,
    /// Last non-blank description line, if any
    pub description: Option<String>,
    /// Operation that produced this state (e.g. "snapshot working copy")
    pub operation: Option<String>,
}

impl EvologEntry {
    /// Create an entry from the fields of a header line
    pub fn new(
        commit_id: impl Into<String>,
        change_id: impl Into<String>,
        author: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            commit_id: commit_id.into(),
            change_id: change_id.into(),
            author: author.into(),
            timestamp: timestamp.into(),
            description: None,
            operation: None,
        }
    }

    /// True if either identifier is in `ids`
    pub fn matches_any(&self, ids: &BTreeSet<String>) -> bool {
        ids.contains(&self.commit_id)
            || (!self.change_id.is_empty() && ids.contains(&self.change_id))
    }
}
