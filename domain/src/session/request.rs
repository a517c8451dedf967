//! Invocation request value object

use super::entities::Message;
use crate::core::error::DomainError;
use crate::core::model::Model;
use std::num::NonZeroU32;

/// One call against one model (Value Object)
///
/// Built once per call and never shared. The same messages are replayed
/// against each fallback model via [`InvocationRequest::retarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    model: Model,
    messages: Vec<Message>,
    max_tokens: NonZeroU32,
}

impl InvocationRequest {
    /// Create a request, rejecting an empty message list
    pub fn new(
        model: Model,
        messages: Vec<Message>,
        max_tokens: NonZeroU32,
    ) -> Result<Self, DomainError> {
        if messages.is_empty() {
            return Err(DomainError::EmptyMessages);
        }
        Ok(Self {
            model,
            messages,
            max_tokens,
        })
    }

    /// System + user pair, the shape every review and synthesis call uses
    pub fn system_and_user(
        model: Model,
        system: impl Into<String>,
        user: impl Into<String>,
        max_tokens: NonZeroU32,
    ) -> Self {
        Self {
            model,
            messages: vec![Message::system(system), Message::user(user)],
            max_tokens,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Advisory upper bound on response length
    pub fn max_tokens(&self) -> NonZeroU32 {
        self.max_tokens
    }

    /// Same messages and budget, different target model
    pub fn retarget(&self, model: &Model) -> Self {
        Self {
            model: model.clone(),
            messages: self.messages.clone(),
            max_tokens: self.max_tokens,
        }
    }
}
