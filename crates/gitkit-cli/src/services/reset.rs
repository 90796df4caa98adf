//! Reset service.

use anyhow::{Context, Result};
use gitkit_core::BranchRef;
use gitkit_git::{GitOps, ResetMode};

/// Service for resetting the current branch with trait-based dependencies.
pub struct ResetService<'a, G: GitOps> {
    repo: &'a G,
    remote: &'a str,
}

impl<'a, G: GitOps> ResetService<'a, G> {
    /// Create a new reset service using `remote` for `--origin`.
    #[must_use]
    pub const fn new(repo: &'a G, remote: &'a str) -> Self {
        Self { repo, remote }
    }

    /// Reset to `branch` (default: the current branch), or to its remote
    /// counterpart when `from_remote` is set. The remote branch is fetched
    /// first. Returns the ref that was reset to.
    pub fn reset(
        &self,
        branch: Option<&BranchRef>,
        from_remote: bool,
        mode: ResetMode,
    ) -> Result<String> {
        let branch = match branch {
            Some(b) => b.to_string(),
            None => self.repo.current_branch()?,
        };

        let reference = if from_remote {
            self.repo
                .fetch(self.remote, &branch)
                .with_context(|| format!("Failed to fetch {}/{branch}", self.remote))?;
            format!("{}/{branch}", self.remote)
        } else {
            branch
        };

        self.repo
            .reset(&reference, mode)
            .with_context(|| format!("Failed to reset to {reference}"))?;

        Ok(reference)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::services::test_mocks::MockGitOps;

    #[test]
    fn test_soft_reset_against_origin_fetches_first() {
        let mock = MockGitOps::new().with_current_branch("feature");
        let main = BranchRef::new("main").unwrap();

        let target = ResetService::new(&mock, "origin")
            .reset(Some(&main), true, ResetMode::Soft)
            .unwrap();

        assert_eq!(target, "origin/main");
        assert_eq!(
            mock.calls(),
            vec!["fetch origin main", "reset --soft origin/main"]
        );
    }

    #[test]
    fn test_defaults_to_current_branch_locally() {
        let mock = MockGitOps::new().with_current_branch("feature");

        let target = ResetService::new(&mock, "origin")
            .reset(None, false, ResetMode::Hard)
            .unwrap();

        assert_eq!(target, "feature");
        assert_eq!(mock.calls(), vec!["reset --hard feature"]);
    }

    #[test]
    fn test_fetch_failure_skips_reset() {
        let mock = MockGitOps::new().with_failure("fetch");

        assert!(
            ResetService::new(&mock, "origin")
                .reset(None, true, ResetMode::Hard)
                .is_err()
        );
        assert!(!mock.called("reset"));
    }
}
