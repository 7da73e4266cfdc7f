//! Fatal errors of a ghar run

use crate::config::ConfigError;
use crate::git::RunError;
use thiserror::Error;

/// Errors that stop a run before any branch is deleted.
///
/// Failures to delete an individual branch are not represented here; they
/// are collected in the removal report instead.
#[derive(Debug, Error)]
pub enum GharError {
    #[error("Error loading config: {0}")]
    Config(#[from] ConfigError),

    /// Not inside a repository, or git is not installed.
    #[error("Error: not a git repository: {0}")]
    Environment(#[source] RunError),

    #[error("Error pruning remote branches: {0}")]
    RemoteSync(#[source] RunError),

    #[error("Error getting gone branches: {0}")]
    Listing(#[source] RunError),

    #[error("Error: terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GharError>;
