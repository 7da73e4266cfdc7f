//! Branch deletion mode

use std::fmt;

/// How `git branch` deletes a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteMode {
    /// `-d`: refuses to delete branches with unmerged commits
    #[default]
    Safe,
    /// `-D`: deletes regardless of merge state
    Force,
}

impl DeleteMode {
    /// Mode selected by the `--merged` switch.
    pub fn from_flag(force_delete: bool) -> Self {
        if force_delete {
            DeleteMode::Force
        } else {
            DeleteMode::Safe
        }
    }

    /// The `git branch` flag for this mode.
    pub fn flag(self) -> &'static str {
        match self {
            DeleteMode::Safe => "-d",
            DeleteMode::Force => "-D",
        }
    }
}

impl fmt::Display for DeleteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteMode::Safe => write!(f, "safe"),
            DeleteMode::Force => write!(f, "forced"),
        }
    }
}
