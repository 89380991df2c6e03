//! Newslens Completion Providers
//!
//! Implementations of the `CompletionProvider` trait from
//! `newslens-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing
//! - `OpenAiProvider`: OpenAI-compatible chat-completions API
//!
//! # Examples
//!
//! ```
//! use newslens_llm::MockProvider;
//! use newslens_domain::{CompletionProvider, CompletionRequest};
//!
//! # async fn example() {
//! let provider = MockProvider::new("[]");
//! let request = CompletionRequest {
//!     system: None,
//!     prompt: "test prompt".to_string(),
//!     max_tokens: 100,
//!     temperature: 0.0,
//! };
//! let reply = provider.complete(&request).await.unwrap();
//! assert_eq!(reply, "[]");
//! # }
//! ```

#![warn(missing_docs)]

pub mod openai;

use newslens_domain::{CompletionProvider, CompletionRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during completion calls
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or transport failure
    #[error("communication error: {0}")]
    Communication(String),

    /// The service answered with an error status
    #[error("service error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body or description
        message: String,
    },

    /// The service reply did not match the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured replies without any network calls. Replies can
/// be keyed by exact prompt, with a default for everything else, and
/// individual prompts can be made to fail.
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    fail_by_default: bool,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

/// Sentinel stored in the response map to make a prompt fail
const ERROR_SENTINEL: &str = "\u{0}ERROR";

impl MockProvider {
    /// Create a provider that returns a fixed reply for every prompt
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            fail_by_default: false,
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a provider whose every call fails
    pub fn failing() -> Self {
        Self {
            default_response: String::new(),
            fail_by_default: true,
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific reply for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Configure a specific prompt to fail
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), ERROR_SENTINEL.to_string());
    }

    /// Number of completion calls made so far
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl CompletionProvider for MockProvider {
    type Error = LlmError;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;

        if self.fail_by_default {
            return Err(LlmError::Communication("mock failure".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(&request.prompt) {
            if response == ERROR_SENTINEL {
                return Err(LlmError::Communication("mock failure".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> CompletionRequest {
        CompletionRequest {
            system: None,
            prompt: prompt.to_string(),
            max_tokens: 100,
            temperature: 0.0,
        }
    }

    #[tokio::test]
    async fn test_mock_default_response() {
        let provider = MockProvider::new("Test response");
        let reply = provider.complete(&request("any prompt")).await.unwrap();
        assert_eq!(reply, "Test response");
    }

    #[tokio::test]
    async fn test_mock_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.complete(&request("hello")).await.unwrap(), "world");
        assert_eq!(provider.complete(&request("foo")).await.unwrap(), "bar");
        assert_eq!(
            provider.complete(&request("unknown")).await.unwrap(),
            "Default mock response"
        );
    }

    #[tokio::test]
    async fn test_mock_call_count() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.complete(&request("one")).await.unwrap();
        provider.complete(&request("two")).await.unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_per_prompt_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt");

        let result = provider.complete(&request("bad prompt")).await;
        assert!(matches!(result, Err(LlmError::Communication(_))));

        // Other prompts still succeed
        assert!(provider.complete(&request("good prompt")).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_failing_provider() {
        let provider = MockProvider::failing();
        assert!(provider.complete(&request("anything")).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_validate_reflects_probe_outcome() {
        let ok = MockProvider::new("Hi!");
        assert!(ok.validate().await);

        let failing = MockProvider::failing();
        assert!(!failing.validate().await);
    }

    #[tokio::test]
    async fn test_mock_clone_shares_call_count() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.complete(&request("x")).await.unwrap();
        assert_eq!(provider2.call_count(), 1);
    }
}
