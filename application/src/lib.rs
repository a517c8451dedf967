//! Application layer for trial-by-hex
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{TokenBudgets, TrialConfig};
pub use ports::{
    agent_invoker::{AgentInvoker, GatewayError},
    progress::{NoProgress, ProgressNotifier, TaskCompletion},
};
pub use use_cases::dispatch::ReviewDispatcher;
pub use use_cases::fallback::{Answered, FallbackChain};
pub use use_cases::run_trial::{RunTrialUseCase, TrialError};
pub use use_cases::synthesize::SynthesisReducer;
