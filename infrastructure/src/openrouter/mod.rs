//! OpenRouter adapter
//!
//! Implements the [`AgentInvoker`](trial_application::AgentInvoker) port over
//! OpenRouter's OpenAI-compatible HTTP API.

pub mod error;
pub mod invoker;
pub mod protocol;

pub use error::OpenRouterError;
pub use invoker::{DEFAULT_BASE_URL, DEFAULT_REFERER, OpenRouterConfig, OpenRouterInvoker};
