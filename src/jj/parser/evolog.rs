//! Parser for graphical `jj evolog` output

use super::{DESCRIPTION_REGEX, HEADER_REGEX, OPERATION_MARKER, OPERATION_REGEX};
use crate::model::EvologEntry;

/// Classification of a single evolog line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvologLine<'a> {
    Header {
        change_id: &'a str,
        author: &'a str,
        timestamp: &'a str,
        commit_id: &'a str,
    },
    Operation(&'a str),
    Description(&'a str),
    /// Blank, graph-only, or otherwise unrecognized
    Other,
}

/// Classify one line
///
/// Checks run in a fixed order: header, operation, description. The
/// description pattern also matches operation lines.
pub fn classify_line(line: &str) -> EvologLine<'_> {
    if line.trim().is_empty() {
        return EvologLine::Other;
    }

    if let Some(caps) = HEADER_REGEX.captures(line) {
        let group = |i| caps.get(i).map_or("", |m| m.as_str());
        return EvologLine::Header {
            change_id: group(1),
            author: group(2),
            timestamp: group(3),
            commit_id: group(4),
        };
    }

    if let Some(caps) = OPERATION_REGEX.captures(line) {
        let operation = caps.get(2).map_or("", |m| m.as_str()).trim();
        if !operation.is_empty() {
            return EvologLine::Operation(operation);
        }
    }

    if let Some(caps) = DESCRIPTION_REGEX.captures(line) {
        let text = caps.get(1).map_or("", |m| m.as_str()).trim();
        if !text.is_empty() && !text.starts_with(OPERATION_MARKER) {
            return EvologLine::Description(text);
        }
    }

    EvologLine::Other
}

/// Entries sealed so far plus the one still collecting lines
#[derive(Debug, Default)]
struct EvologFold {
    sealed: Vec<EvologEntry>,
    open: Option<EvologEntry>,
}

impl EvologFold {
    fn feed(mut self, line: &str) -> Self {
        match classify_line(line) {
            EvologLine::Header {
                change_id,
                author,
                timestamp,
                commit_id,
            } => {
                self.seal();
                self.open = Some(EvologEntry::new(commit_id, change_id, author, timestamp));
            }
            EvologLine::Operation(operation) => {
                if let Some(entry) = self.open.as_mut() {
                    entry.operation = Some(operation.to_string());
                }
            }
            EvologLine::Description(text) => {
                // Last non-blank line of a description block wins
                if let Some(entry) = self.open.as_mut() {
                    entry.description = Some(text.to_string());
                }
            }
            EvologLine::Other => {}
        }
        self
    }

    fn seal(&mut self) {
        if let Some(entry) = self.open.take() {
            self.sealed.push(entry);
        }
    }

    fn finish(mut self) -> Vec<EvologEntry> {
        self.seal();
        self.sealed
    }
}

/// Parse graphical `jj evolog` output into EvologEntry list
///
/// Never fails: lines that are not part of an entry are dropped.
/// Entries keep the order their header lines appeared in.
pub fn parse_evolog(output: &str) -> Vec<EvologEntry> {
    output
        .lines()
        .fold(EvologFold::default(), EvologFold::feed)
        .finish()
}
