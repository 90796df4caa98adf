//! Commit service for stage-commit and stage-commit-push.

use anyhow::{Context, Result};
use gitkit_core::CommitMessage;
use gitkit_git::GitOps;

/// Result of a stage-commit-push run.
#[derive(Debug)]
pub struct CommitPushResult {
    /// Why the commit step failed, when the push went ahead anyway.
    pub commit_error: Option<anyhow::Error>,
}

/// Service for staging and committing with trait-based dependencies.
pub struct CommitService<'a, G: GitOps> {
    repo: &'a G,
}

impl<'a, G: GitOps> CommitService<'a, G> {
    /// Create a new commit service.
    #[must_use]
    pub const fn new(repo: &'a G) -> Self {
        Self { repo }
    }

    /// Stage every working-tree change, then commit it.
    pub fn stage_commit(&self, message: &CommitMessage) -> Result<()> {
        self.repo.stage_all().context("Failed to stage changes")?;
        self.repo
            .commit(message.as_str())
            .context("Failed to create commit")?;
        Ok(())
    }

    /// Stage, commit, then push the current branch to its upstream.
    ///
    /// A failed commit stops here unless `push_after_failed_commit` is set,
    /// in which case the push still runs and its outcome decides the result.
    pub fn stage_commit_push(
        &self,
        message: &CommitMessage,
        push_after_failed_commit: bool,
    ) -> Result<CommitPushResult> {
        let commit_error = match self.stage_commit(message) {
            Ok(()) => None,
            Err(e) if push_after_failed_commit => Some(e),
            Err(e) => return Err(e),
        };

        self.repo.push_current().context("Failed to push")?;

        Ok(CommitPushResult { commit_error })
    }
}
