//! OpenRouter configuration from TOML (`[openrouter]` section)

use crate::config::error::ConfigError;
use crate::openrouter::{DEFAULT_BASE_URL, DEFAULT_REFERER};
use serde::{Deserialize, Serialize};

/// Raw OpenRouter configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenRouterConfig {
    /// Environment variable name for the API key (default: "OPENROUTER_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the OpenRouter API.
    pub base_url: String,
    /// `HTTP-Referer` header value.
    pub referer: String,
    /// `X-Title` header value; the panel title when unset.
    pub title: Option<String>,
    /// Per-call timeout; the panel preset's timeout when unset.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileOpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            title: None,
            timeout_seconds: None,
        }
    }
}

impl FileOpenRouterConfig {
    /// Resolve the credential from the process environment.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the credential: an explicit `api_key` wins, then the variable
    /// named by `api_key_env`. Blank values count as missing.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Result<String, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = self.api_key.as_deref().map(str::trim)
            && !key.is_empty()
        {
            return Ok(key.to_string());
        }

        match lookup(&self.api_key_env) {
            Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => Err(ConfigError::MissingCredential {
                env: self.api_key_env.clone(),
            }),
        }
    }
}
