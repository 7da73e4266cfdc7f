//! Gone branch cleanup
//!
//! - `filter`: removal of protected branch names
//! - `prompt`: the y/n confirmation
//! - `remover`: the orchestrated run
//! - `report`: outcome and per-branch results

mod filter;
mod prompt;
mod remover;
mod report;

pub use filter::filter_protected;
pub use prompt::confirm;
pub use remover::{GoneBranchRemover, RemoveOptions};
pub use report::{BranchFailure, Outcome, RemovalReport};
