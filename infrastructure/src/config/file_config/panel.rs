//! Panel configuration from TOML (`[panel]` section)

use serde::{Deserialize, Serialize};
use trial_application::TrialConfig;
use trial_domain::{Model, Panel, PanelPreset, ReviewerSpec};

/// Raw panel configuration from TOML
///
/// Everything except `preset` is optional and overrides what the preset
/// provides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePanelConfig {
    /// Built-in panel: "classic" or "plus"
    pub preset: PanelPreset,
    /// Custom panel title (only meaningful with `reviewers`)
    pub title: Option<String>,
    /// Custom reviewers; replaces the preset's panel when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewers: Option<Vec<ReviewerSpec>>,
    pub fallback_models: Option<Vec<Model>>,
    pub synthesis_model: Option<Model>,
    /// Defaults to `fallback_models`
    pub synthesis_fallback_models: Option<Vec<Model>>,
    pub review_max_tokens: Option<u32>,
    pub synthesis_max_tokens: Option<u32>,
}

impl FilePanelConfig {
    /// Resolve into the application's run configuration.
    ///
    /// Not validated here: an empty reviewer list or a zero budget surfaces
    /// from [`TrialConfig::validate`] before any call is made.
    pub fn to_trial_config(&self) -> TrialConfig {
        let mut config = TrialConfig::from_preset(self.preset);

        if let Some(reviewers) = &self.reviewers {
            let title = self
                .title
                .clone()
                .unwrap_or_else(|| self.preset.title().to_string());
            config = config.with_panel(Panel::new(title, reviewers.clone()));
        }
        if let Some(fallbacks) = &self.fallback_models {
            config = config
                .with_fallback_models(fallbacks.clone())
                .with_synthesis_fallback_models(fallbacks.clone());
        }
        if let Some(fallbacks) = &self.synthesis_fallback_models {
            config = config.with_synthesis_fallback_models(fallbacks.clone());
        }
        if let Some(model) = &self.synthesis_model {
            config = config.with_synthesis_model(model.clone());
        }
        if let Some(tokens) = self.review_max_tokens {
            config = config.with_review_max_tokens(tokens);
        }
        if let Some(tokens) = self.synthesis_max_tokens {
            config = config.with_synthesis_max_tokens(tokens);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trial_domain::DomainError;

    #[test]
    fn test_default_is_classic_preset() {
        let config = FilePanelConfig::default().to_trial_config();
        assert_eq!(config.panel.len(), 6);
        assert_eq!(config.panel.title(), "Trial by Hex");
    }

    #[test]
    fn test_custom_reviewers() {
        let toml_str = r#"
preset = "plus"
title = "Lab Panel"
fallback_models = ["openai/gpt-5-nano"]
review_max_tokens = 800

[[reviewers]]
model = "openai/gpt-5.1"
persona = "statistician checking the analysis"

[[reviewers]]
model = "mistralai/mistral-large"
name = "The Editor"
persona = "copy editor focused on prose."
"#;
        let file: FilePanelConfig = toml::from_str(toml_str).unwrap();
        let config = file.to_trial_config();

        assert_eq!(config.panel.title(), "Lab Panel");
        assert_eq!(config.panel.len(), 2);
        assert_eq!(
            config.panel.reviewers()[1].model,
            Model::Custom("mistralai/mistral-large".to_string())
        );
        assert_eq!(config.panel.reviewers()[1].name.as_deref(), Some("The Editor"));
        assert_eq!(config.fallback_models, vec![Model::Gpt5Nano]);
        assert_eq!(config.synthesis_fallback_models, vec![Model::Gpt5Nano]);
        assert_eq!(config.review_max_tokens, 800);
        // Budget not overridden keeps the preset's value
        assert_eq!(config.synthesis_max_tokens, 3000);
    }

    #[test]
    fn test_explicit_empty_panel_fails_validation() {
        let file: FilePanelConfig = toml::from_str("reviewers = []").unwrap();
        let config = file.to_trial_config();
        assert_eq!(config.validate(), Err(DomainError::EmptyPanel));
    }

    #[test]
    fn test_separate_synthesis_fallbacks() {
        let toml_str = r#"
fallback_models = ["openai/gpt-5-nano"]
synthesis_fallback_models = ["anthropic/claude-sonnet-4.5"]
synthesis_model = "openai/gpt-5.1"
"#;
        let config = toml::from_str::<FilePanelConfig>(toml_str)
            .unwrap()
            .to_trial_config();
        assert_eq!(config.fallback_models, vec![Model::Gpt5Nano]);
        assert_eq!(config.synthesis_fallback_models, vec![Model::ClaudeSonnet45]);
        assert_eq!(config.synthesis_model, Model::Gpt51);
    }
}
