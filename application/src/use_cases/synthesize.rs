//! Synthesis reducer
//!
//! Folds every review outcome into one aggregate request for the synthesis
//! model.

use super::fallback::FallbackChain;
use crate::ports::agent_invoker::{AgentInvoker, GatewayError};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::info;
use trial_domain::{
    InvocationRequest, Model, Panel, PromptTemplate, ReviewOutcome, SynthesisResult,
};

pub struct SynthesisReducer<I: AgentInvoker + 'static> {
    invoker: Arc<I>,
    model: Model,
    chain: FallbackChain,
    max_tokens: NonZeroU32,
}

impl<I: AgentInvoker + 'static> SynthesisReducer<I> {
    pub fn new(
        invoker: Arc<I>,
        model: Model,
        chain: FallbackChain,
        max_tokens: NonZeroU32,
    ) -> Self {
        Self {
            invoker,
            model,
            chain,
            max_tokens,
        }
    }

    /// Build the aggregate request for `outcomes` without sending it
    pub fn request(&self, panel: &Panel, outcomes: &[ReviewOutcome]) -> InvocationRequest {
        InvocationRequest::system_and_user(
            self.model.clone(),
            PromptTemplate::synthesis_system(panel),
            PromptTemplate::synthesis_prompt(outcomes),
            self.max_tokens,
        )
    }

    /// Synthesize the full outcome sequence.
    ///
    /// On exhaustion the synthesis model's own error is returned; the caller
    /// treats it as terminal.
    pub async fn synthesize(
        &self,
        panel: &Panel,
        outcomes: &[ReviewOutcome],
    ) -> Result<SynthesisResult, GatewayError> {
        info!(
            "Synthesizing {} reviews with {}",
            outcomes.len(),
            self.model
        );
        let request = self.request(panel, outcomes);
        let answered = self.chain.invoke(self.invoker.as_ref(), &request).await?;
        Ok(SynthesisResult::new(answered.model, answered.content))
    }
}
