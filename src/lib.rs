//! ghar: remove local git branches whose upstream is gone from the remote.

pub mod cleanup;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;

pub use cleanup::{GoneBranchRemover, Outcome, RemovalReport, RemoveOptions};
pub use config::{Config, ConfigLoader, ProtectedBranches, YamlConfigLoader};
pub use error::{GharError, Result};
pub use git::{CommandRunner, DeleteMode, ProcessRunner, RunError};
