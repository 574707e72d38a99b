//! HTTP transport for chat-completion requests

use crate::config::GroqConfig;
use crate::error::{IntelError, IntelResult};
use crate::llm::messages::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Transport seam for issuing one chat-completion call.
///
/// The fallback client depends on this trait rather than on reqwest
/// directly, so tests can script responses and count calls.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Issue a single chat-completion request
    async fn send(&self, request: &ChatRequest) -> IntelResult<ChatResponse>;
}

/// Production transport backed by reqwest
pub struct HttpTransport {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpTransport {
    /// Build a transport from the Groq configuration
    pub fn new(config: &GroqConfig) -> IntelResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.timeouts.connection_timeout())
            .timeout(config.timeouts.request_timeout())
            .build()
            .map_err(|e| IntelError::http(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, request: &ChatRequest) -> IntelResult<ChatResponse> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| IntelError::config("Groq API key not configured"))?;

        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %request.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| IntelError::http(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IntelError::api_with_status(
                format!("Groq API error (status {}): {}", status.as_u16(), body),
                &request.model,
                status.as_u16(),
            ));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| IntelError::json(format!("failed to parse chat response: {}", e)))
    }
}
