//! Chat completions wire types (OpenAI-compatible, as served by OpenRouter).
//!
//! Only the fields the invoker reads are modelled; unknown fields are
//! ignored.

use serde::{Deserialize, Serialize};
use trial_application::GatewayError;
use trial_domain::Message;

/// `POST /chat/completions` body
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub max_tokens: u32,
}

/// Response body, success or error
#[derive(Debug, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// `{"error": {"code": 429, "message": "..."}}`
#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    #[serde(default)]
    pub message: String,
}

impl ApiError {
    /// Numeric code when the API sent one that fits an HTTP status
    pub fn status(&self) -> Option<u16> {
        match &self.code {
            Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|c| u16::try_from(c).ok()),
            Some(serde_json::Value::String(s)) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Pull `choices[0].message.content` out of a response body.
///
/// An `error` object wins over any choices; `http_status` is used when the
/// error carries no usable code.
pub fn extract_content(body: &str, http_status: u16) -> Result<String, GatewayError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    if let Some(error) = response.error {
        return Err(GatewayError::Remote {
            status: error.status().unwrap_or(http_status),
            message: error.message,
        });
    }

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| {
            GatewayError::MalformedResponse("missing choices[0].message.content".to_string())
        })
}

/// Best-effort message from a non-2xx body
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ChatResponse>(body) {
        Ok(ChatResponse {
            error: Some(error), ..
        }) if !error.message.is_empty() => error.message,
        _ => body.trim().to_string(),
    }
}
