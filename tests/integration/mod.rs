//! Integration tests for ghar
//!
//! These run the built binary against a real clone whose remote branches are
//! deleted behind its back.

pub mod errors;
pub mod removal;
