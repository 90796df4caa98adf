//! Rollback service: list recent commits by index and hard-reset to one.
//!
//! The index is resolved against a fresh log on every call. If history
//! moves between `--list` and `--commit`, the same index names a different
//! commit.

use anyhow::{Context, Result};
use gitkit_core::RollbackIndex;
use gitkit_git::{CommitSummary, GitOps, ResetMode};

/// Service for rollback operations with trait-based dependencies.
pub struct RollbackService<'a, G: GitOps> {
    repo: &'a G,
    depth: usize,
}

impl<'a, G: GitOps> RollbackService<'a, G> {
    /// Create a new rollback service addressing the last `depth` commits.
    #[must_use]
    pub const fn new(repo: &'a G, depth: usize) -> Self {
        Self { repo, depth }
    }

    /// The last `depth` commits, newest first. Index `n` in the UI is
    /// element `n - 1`.
    pub fn list(&self) -> Result<Vec<CommitSummary>> {
        self.repo
            .recent_commits(self.depth)
            .context("Failed to read commit log")
    }

    /// Hard-reset to the commit at 1-based `raw_index` in [`Self::list`].
    pub fn rollback_to(&self, raw_index: &str) -> Result<(RollbackIndex, CommitSummary)> {
        let mut commits = self.list()?;
        let index = RollbackIndex::resolve(raw_index, commits.len())?;
        let commit = commits.swap_remove(index.offset());

        self.repo
            .reset(&commit.id, ResetMode::Hard)
            .with_context(|| format!("Failed to reset to {}", commit.short_id))?;

        Ok((index, commit))
    }
}
