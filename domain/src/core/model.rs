//! Model value object representing an OpenRouter model identity

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Model identities reachable through OpenRouter (Value Object)
///
/// Identifiers follow the `vendor/name` convention. Anything not listed
/// here round-trips through [`Model::Custom`] unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Anthropic
    ClaudeOpus45,
    ClaudeSonnet45,
    ClaudeHaiku45,
    // OpenAI
    Gpt51,
    Gpt5Mini,
    Gpt5Nano,
    // Google
    Gemini3ProPreview,
    // xAI
    Grok41FastFree,
    // DeepSeek
    DeepSeekChatV31,
    // Anything else OpenRouter routes
    Custom(String),
}

impl Model {
    /// Get the full OpenRouter identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeOpus45 => "anthropic/claude-opus-4.5",
            Model::ClaudeSonnet45 => "anthropic/claude-sonnet-4.5",
            Model::ClaudeHaiku45 => "anthropic/claude-haiku-4.5",
            Model::Gpt51 => "openai/gpt-5.1",
            Model::Gpt5Mini => "openai/gpt-5-mini",
            Model::Gpt5Nano => "openai/gpt-5-nano",
            Model::Gemini3ProPreview => "google/gemini-3-pro-preview",
            Model::Grok41FastFree => "x-ai/grok-4.1-fast:free",
            Model::DeepSeekChatV31 => "deepseek/deepseek-chat-v3.1",
            Model::Custom(s) => s,
        }
    }

    /// Name without the vendor prefix (`anthropic/claude-opus-4.5` → `claude-opus-4.5`)
    pub fn short_name(&self) -> &str {
        let id = self.as_str();
        id.rsplit_once('/').map(|(_, name)| name).unwrap_or(id)
    }

    /// Vendor prefix, if the identifier has one
    pub fn vendor(&self) -> Option<&str> {
        self.as_str().split_once('/').map(|(vendor, _)| vendor)
    }

    /// Check for an empty or whitespace-only identifier
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }

    /// Substitute models tried, in order, when a primary call fails
    pub fn default_fallbacks() -> Vec<Model> {
        vec![Model::Grok41FastFree, Model::ClaudeHaiku45, Model::Gpt5Nano]
    }

    /// Model used for the synthesis pass
    pub fn default_synthesis() -> Model {
        Model::ClaudeOpus45
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "anthropic/claude-opus-4.5" => Model::ClaudeOpus45,
            "anthropic/claude-sonnet-4.5" => Model::ClaudeSonnet45,
            "anthropic/claude-haiku-4.5" => Model::ClaudeHaiku45,
            "openai/gpt-5.1" => Model::Gpt51,
            "openai/gpt-5-mini" => Model::Gpt5Mini,
            "openai/gpt-5-nano" => Model::Gpt5Nano,
            "google/gemini-3-pro-preview" => Model::Gemini3ProPreview,
            "x-ai/grok-4.1-fast:free" => Model::Grok41FastFree,
            "deepseek/deepseek-chat-v3.1" => Model::DeepSeekChatV31,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        let mut models = Model::default_fallbacks();
        models.push(Model::default_synthesis());
        for model in models {
            let parsed = Model::from(model.to_string().as_str());
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model = Model::from("mistralai/mistral-large");
        assert_eq!(model, Model::Custom("mistralai/mistral-large".to_string()));
        assert_eq!(model.to_string(), "mistralai/mistral-large");
    }

    #[test]
    fn test_short_name_and_vendor() {
        assert_eq!(Model::ClaudeOpus45.short_name(), "claude-opus-4.5");
        assert_eq!(Model::ClaudeOpus45.vendor(), Some("anthropic"));
        assert_eq!(Model::Grok41FastFree.short_name(), "grok-4.1-fast:free");

        let bare = Model::from("local-model");
        assert_eq!(bare.short_name(), "local-model");
        assert_eq!(bare.vendor(), None);
    }

    #[test]
    fn test_default_fallback_order() {
        assert_eq!(
            Model::default_fallbacks(),
            vec![Model::Grok41FastFree, Model::ClaudeHaiku45, Model::Gpt5Nano]
        );
    }

    #[test]
    fn test_blank_detection() {
        assert!(Model::from("  ").is_blank());
        assert!(!Model::Gpt51.is_blank());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Model::Gpt5Mini).unwrap();
        assert_eq!(json, "\"openai/gpt-5-mini\"");
        let parsed: Model = serde_json::from_str("\"openai/gpt-5-mini\"").unwrap();
        assert_eq!(parsed, Model::Gpt5Mini);
    }
}
