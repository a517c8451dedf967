//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod openrouter;
mod output;
mod panel;

pub use openrouter::FileOpenRouterConfig;
pub use output::FileOutputConfig;
pub use panel::FilePanelConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// OpenRouter connection settings
    pub openrouter: FileOpenRouterConfig,
    /// Panel, fallback chain, synthesis and budgets
    pub panel: FilePanelConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Non-fatal problems worth logging.
    ///
    /// Fatal ones (empty panel, zero budgets, missing credential) are raised
    /// where the values are used.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.openrouter.api_key.is_some() {
            warnings.push(format!(
                "openrouter.api_key is set in a config file; prefer the {} environment variable",
                self.openrouter.api_key_env
            ));
        }
        if self.openrouter.timeout_seconds == Some(0) {
            warnings.push("openrouter.timeout_seconds is 0; every call will time out".to_string());
        }
        if self.panel.title.is_some() && self.panel.reviewers.is_none() {
            warnings.push("panel.title only applies together with panel.reviewers".to_string());
        }

        warnings
    }
}
