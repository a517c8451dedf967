//! Run configuration for a trial.
//!
//! [`TrialConfig`] holds everything the core needs at process start: the
//! panel, the shared fallback chain, the synthesis target and the token
//! budgets. It is read-only for the duration of a run.

use std::num::NonZeroU32;
use trial_domain::{DomainError, Model, Panel, PanelPreset};

/// Resolved configuration for one trial run.
#[derive(Debug, Clone)]
pub struct TrialConfig {
    pub panel: Panel,
    /// Substitute models tried, in order, for every reviewer
    pub fallback_models: Vec<Model>,
    pub synthesis_model: Model,
    /// Substitute models for the synthesis call
    pub synthesis_fallback_models: Vec<Model>,
    /// Token budget per review call (0 is rejected by [`TrialConfig::validate`])
    pub review_max_tokens: u32,
    /// Token budget for the synthesis call
    pub synthesis_max_tokens: u32,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self::from_preset(PanelPreset::default())
    }
}

/// Budgets proven positive by [`TrialConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBudgets {
    pub review: NonZeroU32,
    pub synthesis: NonZeroU32,
}

impl TrialConfig {
    /// Built-in panel with the default fallback chain and synthesis model
    pub fn from_preset(preset: PanelPreset) -> Self {
        Self {
            panel: preset.panel(),
            fallback_models: Model::default_fallbacks(),
            synthesis_model: Model::default_synthesis(),
            synthesis_fallback_models: Model::default_fallbacks(),
            review_max_tokens: preset.review_max_tokens().get(),
            synthesis_max_tokens: preset.synthesis_max_tokens().get(),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panel = panel;
        self
    }

    pub fn with_fallback_models(mut self, models: Vec<Model>) -> Self {
        self.fallback_models = models;
        self
    }

    pub fn with_synthesis_model(mut self, model: Model) -> Self {
        self.synthesis_model = model;
        self
    }

    pub fn with_synthesis_fallback_models(mut self, models: Vec<Model>) -> Self {
        self.synthesis_fallback_models = models;
        self
    }

    pub fn with_review_max_tokens(mut self, tokens: u32) -> Self {
        self.review_max_tokens = tokens;
        self
    }

    pub fn with_synthesis_max_tokens(mut self, tokens: u32) -> Self {
        self.synthesis_max_tokens = tokens;
        self
    }

    // ==================== Validation ====================

    /// Check everything that must hold before any invocation happens.
    pub fn validate(&self) -> Result<TokenBudgets, DomainError> {
        self.panel.validate()?;
        if self.synthesis_model.is_blank() {
            return Err(DomainError::EmptySynthesisModel);
        }
        let review =
            NonZeroU32::new(self.review_max_tokens).ok_or(DomainError::ZeroTokenBudget("review"))?;
        let synthesis = NonZeroU32::new(self.synthesis_max_tokens)
            .ok_or(DomainError::ZeroTokenBudget("synthesis"))?;
        Ok(TokenBudgets { review, synthesis })
    }
}
