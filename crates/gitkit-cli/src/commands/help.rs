//! `gk help` command and per-operation usage text.

use anyhow::Result;
use clap::CommandFactory;

use super::Cli;
use crate::output;

/// Print every operation's help, or a one-line index with `index`.
#[allow(clippy::unnecessary_wraps)]
pub fn run(index: bool) -> Result<()> {
    let mut cli = Cli::command();
    cli.build();

    if index {
        output::essential(&index_text(&cli));
        return Ok(());
    }

    output::essential(&cli.render_help().to_string());
    for sub in cli.get_subcommands_mut() {
        if sub.get_name() == "help" {
            continue;
        }
        output::essential(&"─".repeat(50));
        output::essential(&sub.render_help().to_string());
    }
    Ok(())
}

/// One line per operation: name and summary.
fn index_text(cli: &clap::Command) -> String {
    let width = cli
        .get_subcommands()
        .map(|s| s.get_name().len())
        .max()
        .unwrap_or(0);

    cli.get_subcommands()
        .map(|s| {
            let about = s.get_about().map(ToString::to_string).unwrap_or_default();
            format!("  {:<width$}  {about}", s.get_name())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print usage for `operation` (used when a required argument is missing).
pub fn print_usage(operation: &str) {
    let mut cli = Cli::command();
    cli.build();

    if let Some(sub) = cli.find_subcommand_mut(operation) {
        output::essential(&sub.render_help().to_string());
        return;
    }
    output::essential(&cli.render_usage().to_string());
}
