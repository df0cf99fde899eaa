//! Skip/pick selection of evolog entries

use std::collections::BTreeSet;

use super::EvologEntry;

/// Split a comma-separated id list, trimming and dropping empty fragments
pub fn parse_id_list(ids: Option<&str>) -> BTreeSet<String> {
    ids.map(|ids| {
        ids.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Which entries survive for replay
///
/// `pick` takes precedence: when it is non-empty, `skip` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub skip: BTreeSet<String>,
    pub pick: BTreeSet<String>,
}

impl FilterSpec {
    /// Build from the raw comma-separated `--skip` / `--pick` values
    pub fn from_lists(skip: Option<&str>, pick: Option<&str>) -> Self {
        Self {
            skip: parse_id_list(skip),
            pick: parse_id_list(pick),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skip.is_empty() && self.pick.is_empty()
    }

    /// Whether `entry` should be replayed
    pub fn accepts(&self, entry: &EvologEntry) -> bool {
        if !self.pick.is_empty() {
            entry.matches_any(&self.pick)
        } else if !self.skip.is_empty() {
            !entry.matches_any(&self.skip)
        } else {
            true
        }
    }

    /// Keep accepted entries, preserving their relative order
    pub fn select(&self, entries: &[EvologEntry]) -> Vec<EvologEntry> {
        entries
            .iter()
            .filter(|entry| self.accepts(entry))
            .cloned()
            .collect()
    }
}
