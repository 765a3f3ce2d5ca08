//! Anthropic Messages API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::CritiqueConfig;
use crate::error::CritiqueError;
use crate::ports::CritiqueModel;

/// Critique model client for the Anthropic Messages API
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    config: CritiqueConfig,
}

impl AnthropicClient {
    /// Create a new Anthropic client
    ///
    /// # Errors
    ///
    /// Returns `CritiqueError::Configuration` if the configuration is
    /// invalid or the HTTP client cannot be built.
    pub fn new(config: CritiqueConfig) -> Result<Self, CritiqueError> {
        config.validate().map_err(CritiqueError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                CritiqueError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Build the messages endpoint URL
    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url)
    }

    /// Get the API key
    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }
}

/// Messages API request body
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

/// Messages API response body
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[async_trait]
impl CritiqueModel for AnthropicClient {
    #[instrument(skip(self, prompt), fields(model = %self.config.model, prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<String, CritiqueError> {
        let request = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!("Sending critique request to Anthropic");

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", self.api_key())
            .header("anthropic-version", self.config.api_version.as_str())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Anthropic request failed");
            return Err(CritiqueError::ServerError(body));
        }

        let messages_response: MessagesResponse = response
            .json()
            .await
            .map_err(|e| CritiqueError::InvalidResponse(e.to_string()))?;

        let reply = messages_response
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| {
                CritiqueError::InvalidResponse("reply contained no text block".to_string())
            })?;

        debug!(reply_len = reply.len(), "Critique reply received");

        Ok(reply)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
