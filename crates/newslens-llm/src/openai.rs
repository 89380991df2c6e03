//! OpenAI chat-completions provider
//!
//! Talks to the OpenAI API (or any endpoint speaking the same wire
//! format, which the tests rely on) with a bearer credential. One request
//! per completion; a failed attempt is terminal, and the pipeline never
//! retries on the caller's behalf.

use crate::LlmError;
use newslens_domain::{ApiKey, CompletionProvider, CompletionRequest};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default model identifier (small general-purpose chat model)
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default timeout for completion requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// OpenAI-compatible completion provider
pub struct OpenAiProvider {
    endpoint: String,
    model: String,
    api_key: ApiKey,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionReply {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a provider for the given credential and model
    pub fn new(api_key: ApiKey, model: impl Into<String>) -> Self {
        Self::with_timeout(api_key, model, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a provider with an explicit request timeout
    pub fn with_timeout(api_key: ApiKey, model: impl Into<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap();

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key,
            client,
        }
    }

    /// Point the provider at a different endpoint (used by tests and
    /// API-compatible gateways)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Model identifier this provider submits requests for
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl CompletionProvider for OpenAiProvider {
    type Error = LlmError;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &request.prompt,
        });

        let body = ChatCompletionBody {
            model: &self.model,
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        debug!(
            "completion request: model={} prompt_chars={}",
            self.model,
            request.prompt.chars().count()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: ChatCompletionReply = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("failed to parse reply: {}", e)))?;

        let content = reply
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("reply contained no choices".to_string()))?
            .message
            .content
            .unwrap_or_default();

        Ok(content.trim().to_string())
    }
}
