//! Error types for the OpenRouter adapter

use thiserror::Error;

/// Result type alias for OpenRouter setup
pub type Result<T> = std::result::Result<T, OpenRouterError>;

/// Errors raised while building the OpenRouter client
///
/// Per-call failures are reported as [`GatewayError`](trial_application::GatewayError)
/// so the fallback chain can handle them uniformly.
#[derive(Error, Debug)]
pub enum OpenRouterError {
    #[error("Invalid header value for {name}: {reason}")]
    InvalidHeader { name: &'static str, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
