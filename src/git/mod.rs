//! Git plumbing for ghar
//!
//! All git access goes through a [`CommandRunner`], which runs the installed
//! `git` binary as a subprocess.

pub mod branch;
pub mod runner;

pub use branch::{
    delete_branch, fetch_prune, gone_branches, list_branches_verbose, parse_gone_branches,
    repository_root, DeleteMode,
};
pub use runner::{run_git, CommandRunner, ProcessRunner, RunError};
