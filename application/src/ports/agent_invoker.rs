//! Agent invoker port
//!
//! Defines the interface for executing one request against one model.

use async_trait::async_trait;
use thiserror::Error;
use trial_domain::InvocationRequest;

/// Errors that can occur during a single invocation
///
/// Every variant is treated alike by the fallback chain: the next model is
/// tried. The variants exist for logging and for the final placeholder text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timeout")]
    Timeout,

    #[error("Remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Executes one request against the model it names.
///
/// Implementations hold no per-call state and may be shared across
/// concurrent reviewers. Adapters live in the infrastructure layer.
#[async_trait]
pub trait AgentInvoker: Send + Sync {
    /// Send the request and return the model's text
    async fn invoke(&self, request: &InvocationRequest) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::Remote {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "Remote error (429): rate limited");
        assert_eq!(GatewayError::Timeout.to_string(), "Timeout");
    }
}
