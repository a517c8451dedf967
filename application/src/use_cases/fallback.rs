//! Fallback chain
//!
//! Replays one request against an ordered list of substitute models until
//! one answers.

use crate::ports::agent_invoker::{AgentInvoker, GatewayError};
use tracing::{debug, warn};
use trial_domain::{InvocationRequest, Model};

/// Text produced by a model in the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answered {
    /// Model that produced `content`: the primary or one of the fallbacks
    pub model: Model,
    pub content: String,
    /// 1-based position of the answering fallback; `None` for the primary
    pub fallback_attempt: Option<usize>,
}

/// Ordered substitute models, shared read-only by every caller in a run.
///
/// No backoff and no attempt limit beyond the list length; each call is
/// already bounded by the invoker's timeout. A fallback equal to the primary
/// is still tried, which amounts to one retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackChain {
    fallbacks: Vec<Model>,
}

impl FallbackChain {
    pub fn new(fallbacks: Vec<Model>) -> Self {
        Self { fallbacks }
    }

    pub fn models(&self) -> &[Model] {
        &self.fallbacks
    }

    /// Try `request` against its own model, then each fallback in order.
    ///
    /// When every attempt fails the primary's error is returned, not the
    /// last fallback's.
    pub async fn invoke<I: AgentInvoker + ?Sized>(
        &self,
        invoker: &I,
        request: &InvocationRequest,
    ) -> Result<Answered, GatewayError> {
        let primary = request.model();
        let primary_error = match invoker.invoke(request).await {
            Ok(content) => {
                return Ok(Answered {
                    model: primary.clone(),
                    content,
                    fallback_attempt: None,
                });
            }
            Err(e) => e,
        };
        warn!("Model {} failed: {}", primary, primary_error);

        for (attempt, fallback) in self.fallbacks.iter().enumerate() {
            debug!("Falling back from {} to {}", primary, fallback);
            let retargeted = request.retarget(fallback);
            match invoker.invoke(&retargeted).await {
                Ok(content) => {
                    warn!("Fallback {} answered for {}", fallback, primary);
                    return Ok(Answered {
                        model: fallback.clone(),
                        content,
                        fallback_attempt: Some(attempt + 1),
                    });
                }
                Err(e) => warn!("Fallback {} failed: {}", fallback, e),
            }
        }

        Err(primary_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::ScriptedInvoker;
    use std::num::NonZeroU32;

    fn request(model: Model) -> InvocationRequest {
        InvocationRequest::system_and_user(model, "system", "document", NonZeroU32::MIN)
    }

    fn remote(status: u16) -> GatewayError {
        GatewayError::Remote {
            status,
            message: format!("status {}", status),
        }
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallbacks() {
        let invoker = ScriptedInvoker::new().reply(&Model::Gpt51, "review");
        let chain = FallbackChain::new(Model::default_fallbacks());

        let answered = chain.invoke(&invoker, &request(Model::Gpt51)).await.unwrap();

        assert_eq!(answered.model, Model::Gpt51);
        assert_eq!(answered.content, "review");
        assert_eq!(answered.fallback_attempt, None);
        assert_eq!(invoker.called_models(), vec!["openai/gpt-5.1"]);
    }

    #[tokio::test]
    async fn test_fallbacks_tried_in_order() {
        let invoker = ScriptedInvoker::new()
            .fail(&Model::Gpt51, GatewayError::Timeout)
            .fail(&Model::Grok41FastFree, remote(429))
            .reply(&Model::ClaudeHaiku45, "rescued");
        let chain = FallbackChain::new(Model::default_fallbacks());

        let answered = chain.invoke(&invoker, &request(Model::Gpt51)).await.unwrap();

        assert_eq!(answered.model, Model::ClaudeHaiku45);
        assert_eq!(answered.content, "rescued");
        assert_eq!(answered.fallback_attempt, Some(2));
        assert_eq!(
            invoker.called_models(),
            vec![
                "openai/gpt-5.1",
                "x-ai/grok-4.1-fast:free",
                "anthropic/claude-haiku-4.5"
            ]
        );
    }

    #[tokio::test]
    async fn test_primary_listed_as_fallback_counts_as_fallback() {
        let invoker = ScriptedInvoker::new()
            .fail(&Model::Gpt51, GatewayError::Timeout)
            .reply(&Model::Gpt51, "second try");
        let chain = FallbackChain::new(vec![Model::Gpt51, Model::Gpt5Nano]);

        let answered = chain.invoke(&invoker, &request(Model::Gpt51)).await.unwrap();

        assert_eq!(answered.model, Model::Gpt51);
        assert_eq!(answered.content, "second try");
        assert_eq!(answered.fallback_attempt, Some(1));
        assert_eq!(invoker.called_models(), vec!["openai/gpt-5.1", "openai/gpt-5.1"]);
    }

    #[tokio::test]
    async fn test_exhaustion_returns_primary_error() {
        let invoker = ScriptedInvoker::new()
            .fail(&Model::Gpt51, remote(500))
            .fail(&Model::Grok41FastFree, GatewayError::Timeout)
            .fail(&Model::ClaudeHaiku45, remote(502))
            .fail(&Model::Gpt5Nano, GatewayError::Transport("reset".into()));
        let chain = FallbackChain::new(Model::default_fallbacks());

        let err = chain
            .invoke(&invoker, &request(Model::Gpt51))
            .await
            .unwrap_err();

        assert_eq!(err, remote(500));
        assert_eq!(invoker.calls().len(), 4);
    }

    #[tokio::test]
    async fn test_empty_chain() {
        let invoker = ScriptedInvoker::new().fail(&Model::Gpt51, GatewayError::Timeout);
        let chain = FallbackChain::default();

        let err = chain
            .invoke(&invoker, &request(Model::Gpt51))
            .await
            .unwrap_err();
        assert_eq!(err, GatewayError::Timeout);
    }

    #[tokio::test]
    async fn test_fallback_replays_same_messages() {
        let invoker = ScriptedInvoker::new()
            .fail(&Model::Gpt51, GatewayError::Timeout)
            .reply(&Model::Grok41FastFree, "ok");
        let chain = FallbackChain::new(Model::default_fallbacks());

        let original = request(Model::Gpt51);
        chain.invoke(&invoker, &original).await.unwrap();

        let calls = invoker.calls();
        assert_eq!(calls[1].messages(), original.messages());
        assert_eq!(calls[1].max_tokens(), original.max_tokens());
    }
}
