//! Review dispatcher
//!
//! Fans the document out to every reviewer concurrently and collects one
//! outcome per reviewer, in panel order.

use super::fallback::FallbackChain;
use crate::ports::agent_invoker::AgentInvoker;
use crate::ports::progress::{ProgressNotifier, TaskCompletion};
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};
use trial_domain::{Document, InvocationRequest, Panel, Phase, PromptTemplate, ReviewOutcome};

/// Drives a panel through the fallback chain.
pub struct ReviewDispatcher<I: AgentInvoker + 'static> {
    invoker: Arc<I>,
    chain: Arc<FallbackChain>,
    max_tokens: NonZeroU32,
}

impl<I: AgentInvoker + 'static> ReviewDispatcher<I> {
    pub fn new(invoker: Arc<I>, chain: Arc<FallbackChain>, max_tokens: NonZeroU32) -> Self {
        Self {
            invoker,
            chain,
            max_tokens,
        }
    }

    /// Review `document` with every panel entry.
    ///
    /// Always returns exactly `panel.len()` outcomes in panel order. A reviewer
    /// whose whole chain fails (or whose task panics) gets a failure
    /// placeholder; the others are unaffected. Dropping the returned future
    /// aborts every in-flight reviewer.
    pub async fn dispatch(
        &self,
        panel: &Panel,
        document: &Document,
        progress: &dyn ProgressNotifier,
    ) -> Vec<ReviewOutcome> {
        let total = panel.len();
        info!("Dispatching {} to {} reviewers", document.id(), total);
        progress.on_phase_start(&Phase::Review, total);

        let mut join_set = JoinSet::new();
        let mut positions = HashMap::with_capacity(total);

        for (index, reviewer) in panel.reviewers().iter().enumerate() {
            let invoker = Arc::clone(&self.invoker);
            let chain = Arc::clone(&self.chain);
            let request = InvocationRequest::system_and_user(
                reviewer.model.clone(),
                PromptTemplate::reviewer_system(reviewer),
                document.content(),
                self.max_tokens,
            );

            let handle = join_set.spawn(async move { chain.invoke(invoker.as_ref(), &request).await });
            positions.insert(handle.id(), index);
        }

        let mut slots: Vec<Option<ReviewOutcome>> = vec![None; total];

        while let Some(joined) = join_set.join_next_with_id().await {
            let (id, result) = match joined {
                Ok((id, result)) => (id, Ok(result)),
                Err(e) => (e.id(), Err(e)),
            };
            let Some(&index) = positions.get(&id) else {
                warn!("Finished task {} has no panel position", id);
                continue;
            };
            let reviewer = panel.reviewers()[index].clone();
            let position = index + 1;

            let outcome = match result {
                Ok(Ok(answered)) => {
                    info!("{} answered via {}", reviewer.label(position), answered.model);
                    let outcome =
                        ReviewOutcome::success(position, reviewer, answered.model, answered.content);
                    match answered.fallback_attempt {
                        Some(attempt) => outcome.via_fallback(attempt),
                        None => outcome,
                    }
                }
                Ok(Err(e)) => {
                    warn!("{} degraded: {}", reviewer.label(position), e);
                    ReviewOutcome::failure(position, reviewer, e.to_string())
                }
                Err(e) => {
                    warn!("{} task failed: {}", reviewer.label(position), e);
                    ReviewOutcome::failure(position, reviewer, format!("task failed: {}", e))
                }
            };

            let label = outcome.label();
            progress.on_task_complete(
                &Phase::Review,
                &TaskCompletion {
                    label: &label,
                    requested: outcome.requested_model(),
                    responded_by: outcome.responded_by.as_ref(),
                    fallback_attempt: outcome.fallback_attempt,
                },
            );
            slots[index] = Some(outcome);
        }

        progress.on_phase_complete(&Phase::Review);

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    ReviewOutcome::failure(
                        index + 1,
                        panel.reviewers()[index].clone(),
                        "reviewer task did not complete",
                    )
                })
            })
            .collect()
    }
}
