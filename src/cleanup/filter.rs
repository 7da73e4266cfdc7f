//! Protected branch filtering

use crate::config::ProtectedBranches;

/// Drop protected names from `gone`, keeping the order of the rest.
pub fn filter_protected(gone: &[String], protected: &ProtectedBranches) -> Vec<String> {
    gone.iter()
        .filter(|branch| !protected.contains(branch.as_str()))
        .cloned()
        .collect()
}
