//! CLI command definitions and handlers.

pub mod branch;
pub mod commit;
pub mod completions;
pub mod help;
pub mod invocation;
pub mod merge;
pub mod pull_request;
pub mod reset;
pub mod rollback;
pub mod stash;
pub mod utils;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use gitkit_core::StashMode;

/// gk - shortcut commands for everyday git workflows.
#[derive(Parser)]
#[command(name = "gk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print every git command before it runs.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stage all changes and commit them.
    StageCommit {
        /// Commit message.
        message: Option<String>,
    },

    /// Stage all changes, commit them, and push the current branch.
    StageCommitPush {
        /// Commit message.
        message: Option<String>,
    },

    /// Stash changes, or manage existing stash entries.
    Stash(StashArgs),

    /// Pull, fetch, and merge a remote branch into the current branch.
    Merge {
        /// Branch to merge from the remote (defaults to the main branch).
        #[arg(value_name = "BRANCH")]
        target: Option<String>,

        /// Branch to merge from the remote.
        #[arg(short, long, conflicts_with = "target")]
        branch: Option<String>,

        /// Abort the merge in progress.
        #[arg(long, conflicts_with_all = ["target", "branch"])]
        abort: bool,
    },

    /// Merge the current branch into a target branch and push the target.
    PullRequest {
        /// Branch to merge into (defaults to the main branch).
        #[arg(short, long)]
        branch: Option<String>,

        /// Resolve conflicts in favor of one side: ours or theirs.
        #[arg(short, long, value_name = "STRATEGY")]
        force: Option<String>,
    },

    /// Checkout a branch, tracking or creating it as needed.
    BranchCheckoutOrCreate {
        /// Branch name.
        branch: Option<String>,
    },

    /// Reset the current branch to a branch or its remote counterpart.
    Reset {
        /// Reset to the remote branch (fetched first).
        #[arg(short, long)]
        origin: bool,

        /// Discard index and working tree changes.
        #[arg(long)]
        hard: bool,

        /// Branch to reset to (defaults to the current branch).
        branch: Option<String>,
    },

    /// Fetch a branch and merge it, resolving conflicts with a strategy.
    MergeForce {
        /// Branch to merge from the remote.
        branch: Option<String>,

        /// Conflict strategy: ours or theirs.
        strategy: Option<String>,
    },

    /// List recent commits, or hard-reset to one of them by index.
    Rollback {
        /// List recent commits with their index.
        #[arg(long, conflicts_with = "commit")]
        list: bool,

        /// Hard-reset to the commit at this index.
        #[arg(long, value_name = "INDEX")]
        commit: Option<String>,

        /// Output the list as JSON.
        #[arg(long, requires = "list")]
        json: bool,
    },

    /// Show help for every command.
    Help {
        /// Show a one-line index instead.
        #[arg(short, long)]
        index: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Stash mode flags; at most one may be given.
#[derive(Args)]
#[group(multiple = false)]
pub struct StashArgs {
    /// Drop every stash entry and hard-reset the working tree.
    #[arg(long)]
    pub clear: bool,

    /// Apply the newest stash entry.
    #[arg(long)]
    pub apply: bool,

    /// Fold current changes into the newest stash entry.
    #[arg(long)]
    pub update: bool,

    /// List stash entries.
    #[arg(long)]
    pub list: bool,
}

impl StashArgs {
    /// The mode selected by the flags.
    #[must_use]
    pub const fn mode(&self) -> StashMode {
        if self.clear {
            StashMode::Clear
        } else if self.apply {
            StashMode::Apply
        } else if self.update {
            StashMode::Update
        } else if self.list {
            StashMode::List
        } else {
            StashMode::Push
        }
    }
}
