//! Run Trial use case
//!
//! Orchestrates the full flow: validate, fan out to the panel, synthesize,
//! extract the verdict, assemble the report.

use super::dispatch::ReviewDispatcher;
use super::fallback::FallbackChain;
use super::synthesize::SynthesisReducer;
use crate::config::TrialConfig;
use crate::ports::agent_invoker::{AgentInvoker, GatewayError};
use crate::ports::progress::{NoProgress, ProgressNotifier, TaskCompletion};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use trial_domain::{Document, DomainError, Model, Phase, Report, extract_verdict};

/// Errors that end a run without a report
#[derive(Error, Debug)]
pub enum TrialError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Synthesis with {model} failed: {cause}")]
    Aggregation { model: Model, cause: GatewayError },

    #[error("Run cancelled")]
    Cancelled,
}

impl From<DomainError> for TrialError {
    fn from(e: DomainError) -> Self {
        TrialError::Configuration(e.to_string())
    }
}

/// Use case for running one document through a review panel
pub struct RunTrialUseCase<I: AgentInvoker + 'static> {
    invoker: Arc<I>,
    config: TrialConfig,
    cancellation: CancellationToken,
}

impl<I: AgentInvoker + 'static> RunTrialUseCase<I> {
    pub fn new(invoker: Arc<I>, config: TrialConfig) -> Self {
        Self {
            invoker,
            config,
            cancellation: CancellationToken::new(),
        }
    }

    /// Abort the run when `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, document: Document) -> Result<Report, TrialError> {
        self.execute_with_progress(document, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        document: Document,
        progress: &dyn ProgressNotifier,
    ) -> Result<Report, TrialError> {
        let budgets = self.config.validate()?;
        let panel = &self.config.panel;

        info!(
            "Starting {} with {} reviewers on {}",
            panel.title(),
            panel.len(),
            document.id()
        );

        // Phase 1: Blind review
        let dispatcher = ReviewDispatcher::new(
            Arc::clone(&self.invoker),
            Arc::new(FallbackChain::new(self.config.fallback_models.clone())),
            budgets.review,
        );
        let outcomes = tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => {
                warn!("Run cancelled during review");
                return Err(TrialError::Cancelled);
            }
            outcomes = dispatcher.dispatch(panel, &document, progress) => outcomes,
        };
        debug_assert_eq!(outcomes.len(), panel.len());

        let degraded = outcomes.iter().filter(|o| !o.is_success()).count();
        if degraded > 0 {
            warn!("{} of {} reviewers degraded", degraded, outcomes.len());
        }

        // Phase 2: Synthesis
        progress.on_phase_start(&Phase::Synthesis, 1);
        let reducer = SynthesisReducer::new(
            Arc::clone(&self.invoker),
            self.config.synthesis_model.clone(),
            FallbackChain::new(self.config.synthesis_fallback_models.clone()),
            budgets.synthesis,
        );
        let synthesized = tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => {
                warn!("Run cancelled during synthesis");
                return Err(TrialError::Cancelled);
            }
            result = reducer.synthesize(panel, &outcomes) => result,
        };

        let label = self.config.synthesis_model.to_string();
        let synthesis = match synthesized {
            Ok(synthesis) => synthesis,
            Err(cause) => {
                progress.on_task_complete(
                    &Phase::Synthesis,
                    &TaskCompletion {
                        label: &label,
                        requested: &self.config.synthesis_model,
                        responded_by: None,
                        fallback_attempt: None,
                    },
                );
                progress.on_phase_complete(&Phase::Synthesis);
                return Err(TrialError::Aggregation {
                    model: self.config.synthesis_model.clone(),
                    cause,
                });
            }
        };
        progress.on_task_complete(
            &Phase::Synthesis,
            &TaskCompletion {
                label: &label,
                requested: &self.config.synthesis_model,
                responded_by: Some(&synthesis.model),
                fallback_attempt: None,
            },
        );
        progress.on_phase_complete(&Phase::Synthesis);

        let verdict = extract_verdict(&synthesis.content);
        info!("Verdict: {}", verdict);

        Ok(Report::assemble(
            panel.title(),
            document.id(),
            outcomes,
            synthesis,
            verdict,
            Utc::now(),
        ))
    }
}
