//! Per-reviewer and synthesis results

use crate::core::model::Model;
use crate::panel::ReviewerSpec;
use serde::{Deserialize, Serialize};

/// Prefix of the text substituted for a reviewer whose every attempt failed
pub const FAILURE_PLACEHOLDER_PREFIX: &str = "Review failed:";

/// Result of one panel entry, in panel order
///
/// A failed reviewer still carries text (the failure placeholder) so later
/// stages never have to special-case a missing slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    /// 1-based panel position
    pub position: usize,
    pub reviewer: ReviewerSpec,
    /// Model that actually produced `content`; `None` when every attempt failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responded_by: Option<Model>,
    /// 1-based fallback position that answered; `None` when the primary
    /// answered or nothing did
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_attempt: Option<usize>,
    /// Review text, or the failure placeholder
    pub content: String,
    /// Cause reported by the primary model when the reviewer degraded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReviewOutcome {
    /// Review text produced by `responded_by`
    pub fn success(
        position: usize,
        reviewer: ReviewerSpec,
        responded_by: Model,
        content: impl Into<String>,
    ) -> Self {
        Self {
            position,
            reviewer,
            responded_by: Some(responded_by),
            fallback_attempt: None,
            content: content.into(),
            error: None,
        }
    }

    /// Mark the text as produced by the `attempt`-th fallback
    pub fn via_fallback(mut self, attempt: usize) -> Self {
        self.fallback_attempt = Some(attempt);
        self
    }

    /// Degraded reviewer: the placeholder embeds the cause
    pub fn failure(position: usize, reviewer: ReviewerSpec, cause: impl Into<String>) -> Self {
        let cause = cause.into();
        Self {
            position,
            reviewer,
            responded_by: None,
            fallback_attempt: None,
            content: format!("{} {}", FAILURE_PLACEHOLDER_PREFIX, cause),
            error: Some(cause),
        }
    }

    pub fn is_success(&self) -> bool {
        self.responded_by.is_some()
    }

    /// True when the text came from the fallback chain, including a
    /// fallback entry that repeats the requested model
    pub fn used_fallback(&self) -> bool {
        self.responded_by
            .as_ref()
            .is_some_and(|m| self.fallback_attempt.is_some() || *m != self.reviewer.model)
    }

    pub fn requested_model(&self) -> &Model {
        &self.reviewer.model
    }

    pub fn label(&self) -> String {
        self.reviewer.label(self.position)
    }
}

/// Output of the synthesis pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisResult {
    /// Model that produced the synthesis (after any fallback)
    pub model: Model,
    pub content: String,
}

impl SynthesisResult {
    pub fn new(model: Model, content: impl Into<String>) -> Self {
        Self {
            model,
            content: content.into(),
        }
    }
}
