//! Terminal output formatting utilities.

use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use gitkit_git::CommitSummary;

static QUIET_MODE: AtomicBool = AtomicBool::new(false);
static VERBOSE_MODE: AtomicBool = AtomicBool::new(false);

/// Set quiet mode globally. Call once at startup.
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

/// Set verbose mode globally. Call once at startup.
pub fn set_verbose(verbose: bool) {
    VERBOSE_MODE.store(verbose, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

/// Whether issued git commands should be echoed.
pub fn is_verbose() -> bool {
    VERBOSE_MODE.load(Ordering::Relaxed)
}

/// Print a success message (suppressed in quiet mode).
pub fn success(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green(), msg);
    }
}

/// Print an error message (always prints to stderr).
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning message (always prints to stderr).
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an info message (suppressed in quiet mode).
pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "→".blue(), msg);
    }
}

/// Print a detail line without prefix (suppressed in quiet mode).
pub fn detail(msg: &str) {
    if !is_quiet() {
        println!("{msg}");
    }
}

/// Print essential machine-readable output (always prints).
pub fn essential(msg: &str) {
    println!("{msg}");
}

/// Echo a git command line before it runs (stderr, so it interleaves
/// with git's own progress output).
pub fn command(cmd: &str) {
    eprintln!("{} {}", "$".dimmed(), cmd.dimmed());
}

/// Format one rollback list line: right-aligned 1-based index, then the
/// `--oneline` rendering of the commit.
#[must_use]
pub fn indexed_commit(position: usize, commit: &CommitSummary) -> String {
    format!(
        "{:>3}  {} {}",
        position,
        commit.short_id.yellow(),
        commit.summary
    )
}
