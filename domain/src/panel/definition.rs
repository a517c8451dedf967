//! Panel definition

use super::reviewer::ReviewerSpec;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The fixed, ordered set of reviewers for one run.
///
/// Order is significant: it is the dispatch order, the order reviews are
/// presented to the synthesis model, and the order of the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    title: String,
    reviewers: Vec<ReviewerSpec>,
}

impl Panel {
    pub fn new(title: impl Into<String>, reviewers: Vec<ReviewerSpec>) -> Self {
        Self {
            title: title.into(),
            reviewers,
        }
    }

    /// Display title, e.g. "Trial by Hex+"
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn reviewers(&self) -> &[ReviewerSpec] {
        &self.reviewers
    }

    pub fn len(&self) -> usize {
        self.reviewers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviewers.is_empty()
    }

    /// Reviewers that carry a display name
    pub fn specialists(&self) -> impl Iterator<Item = &ReviewerSpec> {
        self.reviewers.iter().filter(|r| r.is_specialist())
    }

    /// 1-based labels in panel order
    pub fn labels(&self) -> Vec<String> {
        self.reviewers
            .iter()
            .enumerate()
            .map(|(i, r)| r.label(i + 1))
            .collect()
    }

    /// Smallest reviewer count that is a strict majority of the panel
    pub fn majority(&self) -> usize {
        self.reviewers.len() / 2 + 1
    }

    /// Check the panel can be dispatched.
    ///
    /// Model ids may repeat across reviewers; a reviewer's identity is its
    /// position plus label, not its model.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.reviewers.is_empty() {
            return Err(DomainError::EmptyPanel);
        }
        for (i, reviewer) in self.reviewers.iter().enumerate() {
            if reviewer.model.is_blank() {
                return Err(DomainError::EmptyModelId { index: i + 1 });
            }
            if reviewer.persona.trim().is_empty() {
                return Err(DomainError::EmptyPersona { index: i + 1 });
            }
        }
        Ok(())
    }
}
