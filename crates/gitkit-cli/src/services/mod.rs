//! Service layer for command logic with dependency injection.
//!
//! Each service takes a `GitOps` implementation and already-validated
//! arguments, then issues git calls one after another, stopping at the
//! first failure.

pub mod branch;
pub mod commit;
pub mod merge;
pub mod pull_request;
pub mod reset;
pub mod rollback;
pub mod stash;

#[cfg(test)]
pub mod test_mocks;

pub use branch::{BranchService, CheckoutOutcome};
pub use commit::CommitService;
pub use merge::MergeService;
pub use pull_request::PullRequestService;
pub use reset::ResetService;
pub use rollback::RollbackService;
pub use stash::StashService;
