//! Pull-request service: merge the current branch into a target branch
//! locally and push the target.
//!
//! This is the only operation that compensates for a failure: when a merge
//! without a conflict strategy fails, the target is hard-reset to its remote
//! counterpart instead of being left mid-merge.

use anyhow::{Context, Result};
use gitkit_core::{BranchRef, Error, StrategySelector};
use gitkit_git::{GitOps, ResetMode};

/// Branches involved in a completed pull-request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestResult {
    /// The branch that was merged (and is checked out again).
    pub source: String,
    /// The branch that received the merge and was pushed.
    pub target: String,
}

/// Service for the pull-request operation with trait-based dependencies.
pub struct PullRequestService<'a, G: GitOps> {
    repo: &'a G,
    remote: &'a str,
}

impl<'a, G: GitOps> PullRequestService<'a, G> {
    /// Create a new pull-request service pushing to `remote`.
    #[must_use]
    pub const fn new(repo: &'a G, remote: &'a str) -> Self {
        Self { repo, remote }
    }

    /// Merge the current branch into `target` and push `target`.
    ///
    /// Sequence: fetch all, pull current, checkout target, pull target,
    /// merge current, push target, checkout current.
    pub fn run(&self, target: &BranchRef, strategy: StrategySelector) -> Result<PullRequestResult> {
        let current = self.repo.current_branch()?;
        if *target == current.as_str() {
            return Err(Error::AlreadyTarget(current).into());
        }

        self.repo.fetch_all().context("Failed to fetch")?;
        self.repo
            .pull(self.remote, &current)
            .with_context(|| format!("Failed to pull {current}"))?;

        if let Err(e) = self.repo.checkout(target.as_str()) {
            let _ = self.repo.checkout(&current);
            return Err(anyhow::Error::from(e).context(format!("Failed to checkout {target}")));
        }

        self.repo
            .pull(self.remote, target.as_str())
            .with_context(|| format!("Failed to pull {target}"))?;

        let merge_strategy = strategy.merge_strategy();
        if let Err(e) = self.repo.merge(&current, merge_strategy) {
            if merge_strategy.is_some() {
                return Err(anyhow::Error::from(e)
                    .context(format!("Failed to merge {current} into {target}")));
            }

            let remote_target = target.remote_ref(self.remote);
            if self.repo.reset(&remote_target, ResetMode::Hard).is_err() {
                return Err(anyhow::Error::from(e).context(format!(
                    "Failed to merge {current} into {target}; rollback of {target} failed, \
                     repository is mid-merge on {target}"
                )));
            }

            let note = if self.repo.checkout(&current).is_ok() {
                String::new()
            } else {
                format!(" (still on {target})")
            };
            return Err(anyhow::Error::from(e).context(format!(
                "Failed to merge {current} into {target}; {target} was reset to {remote_target}{note}"
            )));
        }

        self.repo
            .push(self.remote, target.as_str(), false)
            .with_context(|| format!("Failed to push {target}"))?;
        self.repo
            .checkout(&current)
            .with_context(|| format!("Failed to checkout {current}"))?;

        Ok(PullRequestResult {
            source: current,
            target: target.to_string(),
        })
    }
}
