//! Git operations used by the gone-branch cleanup

use crate::git::runner::{run_git, CommandRunner, RunError};

use super::gone::parse_gone_branches;
use super::mode::DeleteMode;

/// Top-level directory of the repository containing the working directory.
///
/// Fails when not inside a repository or when git is not installed.
pub fn repository_root(runner: &dyn CommandRunner) -> Result<String, RunError> {
    run_git(runner, &["rev-parse", "--show-toplevel"])
}

/// Fetch from the remote and drop refs to branches deleted there.
pub fn fetch_prune(runner: &dyn CommandRunner) -> Result<(), RunError> {
    run_git(runner, &["fetch", "--prune"])?;
    Ok(())
}

/// Raw `git branch -vv` listing with upstream tracking annotations.
pub fn list_branches_verbose(runner: &dyn CommandRunner) -> Result<String, RunError> {
    run_git(runner, &["branch", "-vv"])
}

/// Local branches whose upstream no longer exists, in listing order.
pub fn gone_branches(runner: &dyn CommandRunner) -> Result<Vec<String>, RunError> {
    let listing = list_branches_verbose(runner)?;
    Ok(parse_gone_branches(&listing))
}

/// Delete a local branch.
pub fn delete_branch(
    runner: &dyn CommandRunner,
    name: &str,
    mode: DeleteMode,
) -> Result<String, RunError> {
    run_git(runner, &["branch", mode.flag(), name])
}
