//! Stash service.

use anyhow::{Context, Result};
use gitkit_git::{GitOps, ResetMode};

/// Service for stash operations with trait-based dependencies.
pub struct StashService<'a, G: GitOps> {
    repo: &'a G,
}

impl<'a, G: GitOps> StashService<'a, G> {
    /// Create a new stash service.
    #[must_use]
    pub const fn new(repo: &'a G) -> Self {
        Self { repo }
    }

    /// Stash current changes.
    pub fn push(&self) -> Result<()> {
        self.repo.stash_push().context("Failed to stash changes")
    }

    /// Drop every stash entry and discard working tree changes.
    pub fn clear(&self) -> Result<()> {
        self.repo.stash_clear().context("Failed to clear stash")?;
        self.repo
            .reset("HEAD", ResetMode::Hard)
            .context("Failed to reset working tree")
    }

    /// Apply the newest entry on top of the working tree.
    pub fn apply(&self) -> Result<()> {
        self.repo.stash_apply().context("Failed to apply stash")
    }

    /// Fold current changes into the newest entry.
    ///
    /// The entry is popped rather than applied, so re-stashing replaces it
    /// instead of leaving a duplicate behind.
    pub fn update(&self) -> Result<()> {
        self.repo.stash_pop().context("Failed to apply stash")?;
        self.repo.stage_all().context("Failed to stage changes")?;
        self.repo.stash_push().context("Failed to stash changes")
    }

    /// Stash entries, newest first.
    pub fn list(&self) -> Result<Vec<String>> {
        self.repo.stash_list().context("Failed to list stash")
    }
}
