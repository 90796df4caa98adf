//! Value types passed across the [`GitOps`](crate::GitOps) boundary.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// How `git reset` treats the index and working tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetMode {
    /// Move the branch only; keep index and working tree.
    Soft,
    /// Move the branch and discard index and working tree changes.
    Hard,
}

impl ResetMode {
    /// The `git reset` flag for this mode.
    #[must_use]
    pub const fn as_flag(self) -> &'static str {
        match self {
            Self::Soft => "--soft",
            Self::Hard => "--hard",
        }
    }
}

/// Conflict resolution applied to a merge (`git merge -X <option>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Conflicting hunks keep the current branch's side.
    Ours,
    /// Conflicting hunks take the incoming branch's side.
    Theirs,
}

impl MergeStrategy {
    /// The strategy option passed to `git merge -X`.
    #[must_use]
    pub const fn as_option(self) -> &'static str {
        match self {
            Self::Ours => "ours",
            Self::Theirs => "theirs",
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_option())
    }
}

/// One line of a commit log, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitSummary {
    /// Full commit id.
    pub id: String,
    /// Abbreviated commit id.
    pub short_id: String,
    /// First line of the commit message.
    pub summary: String,
    /// Committer time.
    pub time: DateTime<Utc>,
}

impl CommitSummary {
    /// Render the entry the way `git log --oneline` does.
    #[must_use]
    pub fn oneline(&self) -> String {
        format!("{} {}", self.short_id, self.summary)
    }
}
