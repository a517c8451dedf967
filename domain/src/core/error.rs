//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Panel has no reviewers")]
    EmptyPanel,

    #[error("Reviewer {index} has an empty model id")]
    EmptyModelId { index: usize },

    #[error("Reviewer {index} has an empty persona")]
    EmptyPersona { index: usize },

    #[error("Synthesis model id is empty")]
    EmptySynthesisModel,

    #[error("Token budget for {0} must be positive")]
    ZeroTokenBudget(&'static str),

    #[error("Invocation request has no messages")]
    EmptyMessages,

    #[error("Unknown panel preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::EmptyPanel.to_string(), "Panel has no reviewers");
        assert_eq!(
            DomainError::EmptyModelId { index: 3 }.to_string(),
            "Reviewer 3 has an empty model id"
        );
        assert_eq!(
            DomainError::ZeroTokenBudget("synthesis").to_string(),
            "Token budget for synthesis must be positive"
        );
    }
}
