//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod dispatch;
pub mod fallback;
pub mod run_trial;
pub mod synthesize;

#[cfg(test)]
pub(crate) mod testing;
