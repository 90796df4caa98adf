//! Branch service for branch-checkout-or-create.

use anyhow::{Context, Result};
use gitkit_core::BranchRef;
use gitkit_git::GitOps;

/// Which path branch-checkout-or-create took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// An existing local branch was checked out.
    Local,
    /// A local branch was created to track the remote one.
    Tracking,
    /// A new branch was created and pushed upstream.
    Created,
}

/// Service for branch switching with trait-based dependencies.
pub struct BranchService<'a, G: GitOps> {
    repo: &'a G,
    remote: &'a str,
}

impl<'a, G: GitOps> BranchService<'a, G> {
    /// Create a new branch service using `remote`.
    #[must_use]
    pub const fn new(repo: &'a G, remote: &'a str) -> Self {
        Self { repo, remote }
    }

    /// Switch to `name`, creating it if it exists nowhere.
    ///
    /// First match wins: local branch, then remote branch, then create.
    pub fn checkout_or_create(&self, name: &BranchRef) -> Result<CheckoutOutcome> {
        let name = name.as_str();

        if self.repo.local_branch_exists(name) {
            self.repo
                .checkout(name)
                .with_context(|| format!("Failed to checkout {name}"))?;
            return Ok(CheckoutOutcome::Local);
        }

        if self.repo.remote_branch_exists(self.remote, name) {
            self.repo
                .checkout_tracking(self.remote, name)
                .with_context(|| format!("Failed to track {}/{name}", self.remote))?;
            return Ok(CheckoutOutcome::Tracking);
        }

        self.repo
            .checkout_new(name)
            .with_context(|| format!("Failed to create {name}"))?;
        self.repo
            .push(self.remote, name, true)
            .with_context(|| format!("Failed to push {name} to {}", self.remote))?;

        Ok(CheckoutOutcome::Created)
    }
}
