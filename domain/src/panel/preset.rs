//! Built-in panels
//!
//! | Preset | Reviewers | Review budget | Synthesis budget | Timeout |
//! |--------|-----------|---------------|------------------|---------|
//! | `classic` | 6 anonymous | 1500 | 2000 | 120 s |
//! | `plus` | 6 anonymous + 6 specialists | 2000 | 3000 | 180 s |

use super::definition::Panel;
use super::personas;
use super::reviewer::ReviewerSpec;
use crate::core::error::DomainError;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::time::Duration;

/// Built-in panel selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPreset {
    /// Six diverse anonymous reviewers
    #[default]
    Classic,
    /// The classic six plus six named specialists
    Plus,
}

impl PanelPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelPreset::Classic => "classic",
            PanelPreset::Plus => "plus",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PanelPreset::Classic => "Trial by Hex",
            PanelPreset::Plus => "Trial by Hex+",
        }
    }

    pub fn panel(&self) -> Panel {
        let reviewers = match self {
            PanelPreset::Classic => classic_reviewers(),
            PanelPreset::Plus => {
                let mut reviewers = classic_reviewers();
                reviewers.extend(specialist_reviewers());
                reviewers
            }
        };
        Panel::new(self.title(), reviewers)
    }

    pub fn review_max_tokens(&self) -> NonZeroU32 {
        match self {
            PanelPreset::Classic => NonZeroU32::new(1500),
            PanelPreset::Plus => NonZeroU32::new(2000),
        }
        .unwrap_or(NonZeroU32::MIN)
    }

    pub fn synthesis_max_tokens(&self) -> NonZeroU32 {
        match self {
            PanelPreset::Classic => NonZeroU32::new(2000),
            PanelPreset::Plus => NonZeroU32::new(3000),
        }
        .unwrap_or(NonZeroU32::MIN)
    }

    /// Per-call timeout the invoker should apply
    pub fn request_timeout(&self) -> Duration {
        match self {
            PanelPreset::Classic => Duration::from_secs(120),
            PanelPreset::Plus => Duration::from_secs(180),
        }
    }
}

impl std::fmt::Display for PanelPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PanelPreset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "hex" | "6" => Ok(PanelPreset::Classic),
            "plus" | "hex+" | "12" => Ok(PanelPreset::Plus),
            other => Err(DomainError::UnknownPreset(other.to_string())),
        }
    }
}

fn classic_reviewers() -> Vec<ReviewerSpec> {
    vec![
        ReviewerSpec::new(
            Model::ClaudeSonnet45,
            "technical specialist focused on methodology and rigor",
        ),
        ReviewerSpec::new(
            Model::Gpt51,
            "skeptical critic looking for weaknesses and logical gaps",
        ),
        ReviewerSpec::new(
            Model::Gemini3ProPreview,
            "constructive reviewer focused on practical improvement",
        ),
        ReviewerSpec::new(
            Model::Grok41FastFree,
            "accessibility reviewer checking clarity for general audience",
        ),
        ReviewerSpec::new(
            Model::DeepSeekChatV31,
            "literature reviewer checking connections to existing work",
        ),
        ReviewerSpec::new(
            Model::Gpt5Mini,
            "experimental design and reproducibility reviewer",
        ),
    ]
}

fn specialist_reviewers() -> Vec<ReviewerSpec> {
    vec![
        ReviewerSpec::named(
            Model::ClaudeOpus45,
            "The Logical Consistency Reviewer",
            personas::LOGICAL_CONSISTENCY,
        ),
        ReviewerSpec::named(
            Model::ClaudeSonnet45,
            "The Semantic Analyst (The Wittgensteinian)",
            personas::SEMANTIC_ANALYST,
        ),
        ReviewerSpec::named(
            Model::Gpt51,
            "The Ethical Alignment Sentinel",
            personas::ETHICAL_ALIGNMENT,
        ),
        ReviewerSpec::named(
            Model::Gemini3ProPreview,
            "The Systems Architect",
            personas::SYSTEMS_ARCHITECT,
        ),
        ReviewerSpec::named(
            Model::DeepSeekChatV31,
            "The Interdisciplinary Catalyst",
            personas::INTERDISCIPLINARY_CATALYST,
        ),
        ReviewerSpec::named(
            Model::Grok41FastFree,
            "The Steel Man Advocate",
            personas::STEEL_MAN_ADVOCATE,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_panel_shape() {
        let panel = PanelPreset::Classic.panel();
        assert_eq!(panel.len(), 6);
        assert_eq!(panel.title(), "Trial by Hex");
        assert_eq!(panel.specialists().count(), 0);
        assert!(panel.validate().is_ok());
    }

    #[test]
    fn test_plus_panel_extends_classic() {
        let classic = PanelPreset::Classic.panel();
        let plus = PanelPreset::Plus.panel();
        assert_eq!(plus.len(), 12);
        assert_eq!(&plus.reviewers()[..6], classic.reviewers());
        assert_eq!(plus.specialists().count(), 6);
        assert_eq!(
            plus.reviewers()[6].name.as_deref(),
            Some("The Logical Consistency Reviewer")
        );
        assert!(plus.validate().is_ok());
    }

    #[test]
    fn test_budgets() {
        assert_eq!(PanelPreset::Classic.review_max_tokens().get(), 1500);
        assert_eq!(PanelPreset::Classic.synthesis_max_tokens().get(), 2000);
        assert_eq!(PanelPreset::Plus.review_max_tokens().get(), 2000);
        assert_eq!(PanelPreset::Plus.synthesis_max_tokens().get(), 3000);
        assert_eq!(PanelPreset::Plus.request_timeout(), Duration::from_secs(180));
    }

    #[test]
    fn test_parse_preset() {
        assert_eq!("classic".parse::<PanelPreset>().unwrap(), PanelPreset::Classic);
        assert_eq!("PLUS".parse::<PanelPreset>().unwrap(), PanelPreset::Plus);
        assert_eq!("hex+".parse::<PanelPreset>().unwrap(), PanelPreset::Plus);
        assert!(matches!(
            "jury".parse::<PanelPreset>(),
            Err(DomainError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_preset_serde_lowercase() {
        let json = serde_json::to_string(&PanelPreset::Plus).unwrap();
        assert_eq!(json, "\"plus\"");
    }
}
