//! # gitkit-git
//!
//! Git capability interface for gitkit. The [`GitOps`] trait names every
//! operation the command layer may issue; [`Repository`] implements it on
//! top of git2-rs and the `git` executable.

mod error;
mod repository;
mod traits;
mod types;

pub use error::{Error, Result};
pub use repository::Repository;
pub use traits::GitOps;
pub use types::{CommitSummary, MergeStrategy, ResetMode};
