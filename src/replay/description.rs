//! Commit message for a replayed entry

use crate::jj::constants::special;
use crate::model::EvologEntry;

/// Prefix for messages synthesized from the recorded operation
pub const OPERATION_PREFIX: &str = "Evolog: ";

/// Prefix for messages synthesized from the timestamp
pub const TIMESTAMP_PREFIX: &str = "Evolog entry from ";

/// Stand-in when the entry has no timestamp either
pub const UNKNOWN_TIMESTAMP: &str = "an unknown time";

fn is_placeholder(description: &str) -> bool {
    description == special::NO_DESCRIPTION || description == special::EMPTY_NO_DESCRIPTION
}

/// Pick the message for the change recreating `entry`
///
/// Order: the entry's own description, then its operation, then its
/// timestamp. Never returns an empty string.
pub fn resolve_description(entry: &EvologEntry) -> String {
    if let Some(description) = entry.description.as_deref()
        && !description.trim().is_empty()
        && !is_placeholder(description)
    {
        return description.to_string();
    }

    if let Some(operation) = entry.operation.as_deref()
        && !operation.trim().is_empty()
    {
        return format!("{OPERATION_PREFIX}{operation}");
    }

    let timestamp = match entry.timestamp.trim() {
        "" => UNKNOWN_TIMESTAMP,
        timestamp => timestamp,
    };
    format!("{TIMESTAMP_PREFIX}{timestamp}")
}
