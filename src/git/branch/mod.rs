//! Git branch operations
//!
//! - `gone`: parsing `git branch -vv` for branches whose upstream is gone
//! - `mode`: safe vs. forced deletion
//! - `operations`: repository check, prune, listing and deletion

mod gone;
mod mode;
mod operations;

pub use gone::parse_gone_branches;
pub use mode::DeleteMode;
pub use operations::{
    delete_branch, fetch_prune, gone_branches, list_branches_verbose, repository_root,
};
