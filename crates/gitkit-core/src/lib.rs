//! # gitkit-core
//!
//! Argument types, error taxonomy and configuration shared by the gitkit
//! command layer.

pub mod args;
pub mod branch_ref;
pub mod config;
pub mod error;

pub use args::{CommitMessage, RollbackIndex, StashMode, StrategySelector};
pub use branch_ref::BranchRef;
pub use config::Config;
pub use error::{Error, Result};
