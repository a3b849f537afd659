//! Git repository fixtures built through the `git` CLI.
//!
//! Everything here shells out to `git` on purpose: the crates under test
//! treat the tool as an opaque subprocess, so fixtures must produce state
//! the real tool recognises.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Run `git <args>` in `dir`, panicking on any failure.
///
/// # Panics
/// Panics with the captured stderr if the command cannot be spawned or
/// exits non-zero.
pub fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "`git {args:?}` failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// Run `git <args>` in `dir` and return trimmed stdout.
///
/// # Panics
/// Same conditions as [`git`].
pub fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "`git {args:?}` failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Initialise an empty git repository with test identity configured but no
/// commits.
///
/// Use for: tests that need repository detection to succeed without
/// needing any commit history.
///
/// # Panics
/// Panics if any git operation fails.
pub fn init_repo(path: &Path) {
    git(path, &["init"]);
    git(path, &["config", "user.email", "test@test.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
}

/// Initialise a git repository on branch `main` with one commit in history.
///
/// Specifically:
/// - Runs [`init_repo`]
/// - Creates `README.md` and makes an initial commit
/// - Renames the default branch to `main`
///
/// Use for: tests that exercise branch lifecycle, status, commit, or
/// cleanup flows against real history.
///
/// # Panics
/// Panics if any git operation fails.
pub fn repo_with_commit(path: &Path) {
    init_repo(path);

    fs::write(path.join("README.md"), "# Test")
        .unwrap_or_else(|e| panic!("repo_with_commit: failed to write README.md: {e}"));

    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);
    git(path, &["branch", "-m", "main"]);
}
