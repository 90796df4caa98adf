//! Trait abstractions for git operations.
//!
//! This module defines the `GitOps` trait which abstracts the git
//! capabilities gitkit needs, enabling dependency injection and testability.

use crate::{CommitSummary, MergeStrategy, ResetMode, Result};

/// Trait for git repository operations.
///
/// This trait abstracts git operations, allowing for:
/// - Dependency injection in services
/// - Mock implementations for testing
///
/// Every call blocks until the underlying operation finishes. Failures are
/// returned as-is; implementations never retry.
#[allow(clippy::missing_errors_doc)]
pub trait GitOps {
    // === Repository Info ===

    /// Get the current branch name.
    ///
    /// Returns an error if HEAD is detached or not on a branch.
    fn current_branch(&self) -> Result<String>;

    // === Ref Queries ===

    /// Check whether `refs/heads/<name>` exists.
    fn local_branch_exists(&self, name: &str) -> bool;

    /// Check whether `refs/remotes/<remote>/<name>` exists.
    fn remote_branch_exists(&self, remote: &str, name: &str) -> bool;

    /// The most recent commits reachable from HEAD, newest first.
    fn recent_commits(&self, limit: usize) -> Result<Vec<CommitSummary>>;

    // === Working Tree ===

    /// Stage all changes, including deletions and untracked files.
    fn stage_all(&self) -> Result<()>;

    /// Create a commit from the index.
    fn commit(&self, message: &str) -> Result<()>;

    /// Reset the current branch to `reference`.
    fn reset(&self, reference: &str, mode: ResetMode) -> Result<()>;

    // === Branches ===

    /// Checkout an existing local branch.
    fn checkout(&self, branch: &str) -> Result<()>;

    /// Create a local branch tracking `<remote>/<branch>` and check it out.
    fn checkout_tracking(&self, remote: &str, branch: &str) -> Result<()>;

    /// Create a new local branch at HEAD and check it out.
    fn checkout_new(&self, branch: &str) -> Result<()>;

    // === Merging ===

    /// Merge `reference` into the current branch.
    fn merge(&self, reference: &str, strategy: Option<MergeStrategy>) -> Result<()>;

    /// Abort a merge in progress.
    fn merge_abort(&self) -> Result<()>;

    // === Remote Operations ===

    /// Fetch all remotes.
    fn fetch_all(&self) -> Result<()>;

    /// Fetch a single branch from a remote.
    fn fetch(&self, remote: &str, branch: &str) -> Result<()>;

    /// Pull the current branch from its configured upstream.
    fn pull_current(&self) -> Result<()>;

    /// Pull `branch` from `remote` into the current branch.
    fn pull(&self, remote: &str, branch: &str) -> Result<()>;

    /// Push the current branch to its configured upstream.
    fn push_current(&self) -> Result<()>;

    /// Push `branch` to `remote`, optionally recording it as upstream.
    fn push(&self, remote: &str, branch: &str, set_upstream: bool) -> Result<()>;

    // === Stash ===

    /// Stash working tree changes.
    fn stash_push(&self) -> Result<()>;

    /// Apply the most recent stash entry, keeping it.
    fn stash_apply(&self) -> Result<()>;

    /// Apply the most recent stash entry and drop it.
    fn stash_pop(&self) -> Result<()>;

    /// Drop every stash entry.
    fn stash_clear(&self) -> Result<()>;

    /// Stash entries, most recent first (`stash@{0}: ...`).
    fn stash_list(&self) -> Result<Vec<String>>;
}
