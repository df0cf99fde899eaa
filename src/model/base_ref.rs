//! Base reference for a replayed change

use std::fmt;

use crate::jj::constants::special;

/// Where a newly created change is stacked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseRef {
    /// The parent of the given commit (`<commit>-`)
    ParentOf(String),
    /// jj's current working-copy position (implicit, no revision argument)
    WorkingCopy,
}

impl BaseRef {
    pub fn parent_of(commit_id: impl Into<String>) -> Self {
        BaseRef::ParentOf(commit_id.into())
    }
}

impl fmt::Display for BaseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseRef::ParentOf(commit_id) => write!(f, "{commit_id}{}", special::PARENT_SUFFIX),
            BaseRef::WorkingCopy => f.write_str(special::WORKING_COPY),
        }
    }
}
