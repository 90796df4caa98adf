//! Multi-call invocation.
//!
//! `gk` can be installed under per-operation names such as
//! `git-pull-request`. git runs any `git-<name>` executable on `PATH` as
//! `git <name>`, so the same binary then also answers `git pull-request`.

use std::ffi::OsString;
use std::path::Path;

use clap::CommandFactory;

use super::Cli;

/// Prefix that marks a per-operation executable name.
const OPERATION_PREFIX: &str = "git-";

/// Rewrite `git-<operation> ARGS` into `gk <operation> ARGS`.
///
/// Arguments are returned unchanged when the program name is not
/// `git-<operation>` for a known operation.
pub fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();

    let operation = args.first().and_then(operation_from_program);
    if let Some(operation) = operation {
        args[0] = OsString::from("gk");
        args.insert(1, OsString::from(operation));
    }

    args
}

fn operation_from_program(program: &OsString) -> Option<String> {
    let stem = Path::new(program).file_stem()?.to_str()?;
    let operation = stem.strip_prefix(OPERATION_PREFIX)?;

    Cli::command()
        .get_subcommands()
        .any(|s| s.get_name() == operation)
        .then(|| operation.to_string())
}
