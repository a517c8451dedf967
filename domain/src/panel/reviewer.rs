//! Reviewer specification

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// One reviewer on a panel: which model, which persona, and an optional name.
///
/// A reviewer with a `name` is a named specialist and gets the specialist
/// system prompt; an anonymous reviewer gets the generic blind-review one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewerSpec {
    pub model: Model,
    pub persona: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ReviewerSpec {
    /// Anonymous reviewer
    pub fn new(model: impl Into<Model>, persona: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            persona: persona.into(),
            name: None,
        }
    }

    /// Named specialist
    pub fn named(
        model: impl Into<Model>,
        name: impl Into<String>,
        persona: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            persona: persona.into(),
            name: Some(name.into()),
        }
    }

    pub fn is_specialist(&self) -> bool {
        self.name.is_some()
    }

    /// Label used in prompts and reports; `position` is 1-based
    pub fn label(&self, position: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Reviewer {}", position),
        }
    }
}
