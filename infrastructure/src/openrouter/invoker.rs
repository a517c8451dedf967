//! HTTP agent invoker backed by OpenRouter's chat completions endpoint.

use super::error::{OpenRouterError, Result};
use super::protocol::{ChatRequest, error_message, extract_content};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use tracing::debug;
use trial_application::{AgentInvoker, GatewayError};
use trial_domain::InvocationRequest;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_REFERER: &str = "https://github.com/Eden-Eldith/Trial-by-Hex";

/// Connection settings for [`OpenRouterInvoker`]
#[derive(Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub base_url: String,
    /// Sent as `HTTP-Referer` for OpenRouter's app attribution
    pub referer: String,
    /// Sent as `X-Title`
    pub title: String,
    /// Per-call timeout, covering connect through reading the body
    pub timeout: Duration,
}

impl std::fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("referer", &self.referer)
            .field("title", &self.title)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Stateless invoker: one POST per call, shared across concurrent reviewers.
pub struct OpenRouterInvoker {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl OpenRouterInvoker {
    pub fn new(config: OpenRouterConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/');
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(OpenRouterError::InvalidBaseUrl(config.base_url.clone()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("http-referer"),
            header_value("HTTP-Referer", &config.referer)?,
        );
        headers.insert(
            HeaderName::from_static("x-title"),
            header_value("X-Title", &config.title)?,
        );

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url),
            api_key: config.api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| OpenRouterError::InvalidHeader {
        name,
        reason: e.to_string(),
    })
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Transport(e.to_string())
    }
}

#[async_trait]
impl AgentInvoker for OpenRouterInvoker {
    async fn invoke(&self, request: &InvocationRequest) -> std::result::Result<String, GatewayError> {
        let body = ChatRequest {
            model: request.model().as_str(),
            messages: request.messages(),
            max_tokens: request.max_tokens().get(),
        };
        debug!("POST {} model={}", self.endpoint, request.model());

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        debug!("{} answered {} ({} bytes)", request.model(), status, text.len());

        if !status.is_success() {
            return Err(GatewayError::Remote {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        extract_content(&text, status.as_u16())
    }
}
