//! OpenAI-compatible chat completion client

use async_trait::async_trait;
use reqwest::Client;

use crate::error::CompletionError;

use super::types::{ApiError, Completion, CompletionRequest, CompletionResponse, Message};
use super::CompletionClient;

/// Client for the `chat/completions` endpoint.
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAIClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `api_key` - Bearer token
    /// * `model` - Model name (e.g., "gpt-3.5-turbo")
    /// * `base_url` - API root, e.g. `https://api.openai.com/v1`
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAIClient {
    async fn complete(
        &self,
        messages: Vec<Message>,
        max_tokens: Option<u32>,
    ) -> Result<Completion, CompletionError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            let message = match serde_json::from_str::<ApiError>(&error_text) {
                Ok(api_error) => api_error.error.message,
                Err(_) => error_text,
            };

            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: CompletionResponse = response.json().await?;
        body.into_completion().ok_or(CompletionError::EmptyResponse)
    }
}

impl std::fmt::Debug for OpenAIClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
