//! gk - shortcut commands for everyday git workflows.

use clap::Parser;

mod commands;
mod output;
mod services;

use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse_from(commands::invocation::normalize(std::env::args_os()));

    output::set_quiet(cli.quiet);
    output::set_verbose(cli.verbose);

    let result = match cli.command {
        Commands::StageCommit { message } => commands::commit::run(message.as_deref()),
        Commands::StageCommitPush { message } => commands::commit::run_push(message.as_deref()),
        Commands::Stash(args) => commands::stash::run(args.mode()),
        Commands::Merge {
            target,
            branch,
            abort,
        } => commands::merge::run(branch.or(target).as_deref(), abort),
        Commands::PullRequest { branch, force } => {
            commands::pull_request::run(branch.as_deref(), force.as_deref())
        }
        Commands::BranchCheckoutOrCreate { branch } => commands::branch::run(branch.as_deref()),
        Commands::Reset {
            origin,
            hard,
            branch,
        } => commands::reset::run(origin, hard, branch.as_deref()),
        Commands::MergeForce { branch, strategy } => {
            commands::merge::run_force(branch.as_deref(), strategy.as_deref())
        }
        Commands::Rollback { list, commit, json } => {
            commands::rollback::run(list, commit.as_deref(), json)
        }
        Commands::Help { index } => commands::help::run(index),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        std::process::exit(report(&e));
    }
}

/// Print `err` and return the exit code it maps to.
///
/// A missing argument prints the operation's usage and exits 0. A failed
/// git call exits with git's own code.
fn report(err: &anyhow::Error) -> i32 {
    let core = err
        .chain()
        .find_map(|e| e.downcast_ref::<gitkit_core::Error>());

    if let Some(gitkit_core::Error::Usage { operation }) = core {
        commands::help::print_usage(operation);
        return 0;
    }

    output::error(&format!("{err:#}"));

    if let Some(e) = core {
        return e.exit_code();
    }
    err.chain()
        .find_map(|e| e.downcast_ref::<gitkit_git::Error>())
        .and_then(gitkit_git::Error::exit_code)
        .unwrap_or(1)
}
