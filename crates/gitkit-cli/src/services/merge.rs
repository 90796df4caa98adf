//! Merge service for merge, merge --abort and merge-force.

use anyhow::{Context, Result};
use gitkit_core::BranchRef;
use gitkit_git::{GitOps, MergeStrategy};

/// Service for merge operations with trait-based dependencies.
pub struct MergeService<'a, G: GitOps> {
    repo: &'a G,
    remote: &'a str,
}

impl<'a, G: GitOps> MergeService<'a, G> {
    /// Create a new merge service merging from `remote`.
    #[must_use]
    pub const fn new(repo: &'a G, remote: &'a str) -> Self {
        Self { repo, remote }
    }

    /// Abort the merge in progress.
    ///
    /// The git error is returned untouched so its exit code reaches the shell.
    pub fn abort(&self) -> Result<()> {
        Ok(self.repo.merge_abort()?)
    }

    /// Update the current branch and merge `<remote>/<target>` into it.
    ///
    /// The current branch is pulled and all remotes fetched no matter which
    /// target was asked for. Returns the merged ref.
    pub fn merge(&self, target: &BranchRef) -> Result<String> {
        self.repo.pull_current().context("Failed to pull current branch")?;
        self.repo.fetch_all().context("Failed to fetch")?;

        let reference = target.remote_ref(self.remote);
        self.repo
            .merge(&reference, None)
            .with_context(|| format!("Failed to merge {reference}"))?;

        Ok(reference)
    }

    /// Fetch `branch` and merge it, resolving conflicts with `strategy`.
    pub fn merge_force(&self, branch: &BranchRef, strategy: MergeStrategy) -> Result<String> {
        self.repo
            .fetch(self.remote, branch.as_str())
            .with_context(|| format!("Failed to fetch {branch}"))?;

        let reference = branch.remote_ref(self.remote);
        self.repo
            .merge(&reference, Some(strategy))
            .with_context(|| format!("Failed to merge {reference} with -X {strategy}"))?;

        Ok(reference)
    }
}
