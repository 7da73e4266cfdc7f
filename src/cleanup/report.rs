//! Outcome types for a cleanup run

use crate::git::RunError;

/// A branch that could not be deleted.
#[derive(Debug)]
pub struct BranchFailure {
    pub branch: String,
    pub error: RunError,
}

/// Result of the deletion phase.
#[derive(Debug, Default)]
pub struct RemovalReport {
    /// Branches deleted, in order
    pub deleted: Vec<String>,
    /// Branches whose deletion failed (non-fatal)
    pub failed: Vec<BranchFailure>,
}

/// How a run ended. All of these are successful runs.
#[derive(Debug)]
pub enum Outcome {
    /// No gone branch survived the protection filter
    NothingToRemove,
    /// The user declined the confirmation prompt
    Aborted { candidates: Vec<String> },
    /// The deletion phase ran
    Completed(RemovalReport),
}

impl Outcome {
    pub fn deleted(&self) -> &[String] {
        match self {
            Outcome::Completed(report) => &report.deleted,
            _ => &[],
        }
    }
}
