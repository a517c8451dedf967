//! Application-level configuration.
//!
//! - [`TrialConfig`] - panel, fallback chains, synthesis target and budgets

pub mod trial_config;

pub use trial_config::{TokenBudgets, TrialConfig};
