//! Detection of branches whose upstream is gone
//!
//! Works on the output of `git branch -vv`:
//!
//! ```text
//! * main          0123456 [origin/main] Initial commit
//!   feature/gone  7890abc [origin/feature/gone: gone] Add feature
//!   local-only    def5678 Scratch work
//! ```

/// Annotation git prints when the tracked upstream no longer exists.
const GONE_MARKER: &str = ": gone]";

/// Extract the names of branches whose upstream is gone, in listing order.
///
/// Lines without the gone marker are ignored and nothing here is an error;
/// an empty listing yields an empty list. Duplicates are kept.
pub fn parse_gone_branches(listing: &str) -> Vec<String> {
    listing
        .lines()
        .filter(|line| line.contains(GONE_MARKER))
        .filter_map(branch_name)
        .collect()
}

/// First field of a listing line, without git's head markers.
fn branch_name(line: &str) -> Option<String> {
    let line = line.trim_start();
    // `*` marks the current branch, `+` a branch checked out in another worktree
    let line = line
        .strip_prefix("* ")
        .or_else(|| line.strip_prefix("+ "))
        .unwrap_or(line);

    line.split_whitespace().next().map(|name| name.trim().to_string())
}
