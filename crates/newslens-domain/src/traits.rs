//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and
//! infrastructure. Infrastructure implementations live in other crates
//! (newslens-llm).

/// Prompt used by the credential probe. Small on purpose: the probe exists
/// only to confirm the service accepts the credential.
pub const CREDENTIAL_PROBE_PROMPT: &str = "Hello";

/// Output budget for the credential probe.
pub const CREDENTIAL_PROBE_MAX_TOKENS: u32 = 5;

/// A wire-independent completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Optional system-role framing message
    pub system: Option<String>,

    /// User-role instruction text
    pub prompt: String,

    /// Maximum output token budget
    pub max_tokens: u32,

    /// Sampling temperature (low values favor determinism)
    pub temperature: f32,
}

impl CompletionRequest {
    /// The minimal request used to confirm a credential is accepted.
    pub fn credential_probe() -> Self {
        Self {
            system: None,
            prompt: CREDENTIAL_PROBE_PROMPT.to_string(),
            max_tokens: CREDENTIAL_PROBE_MAX_TOKENS,
            temperature: 0.0,
        }
    }
}

/// Trait for completion-service operations
///
/// Implemented by the infrastructure layer (newslens-llm).
#[allow(async_fn_in_trait)]
pub trait CompletionProvider {
    /// Error type for completion operations
    type Error: std::fmt::Display;

    /// Submit a completion request and return the raw model reply.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error>;

    /// Confirm the service accepts this provider's credential by issuing
    /// one minimal probe completion. Any failure, auth or transport alike,
    /// reads as "not validated" (the caller's recourse is the same either
    /// way: re-enter the key).
    async fn validate(&self) -> bool {
        match self.complete(&CompletionRequest::credential_probe()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("credential probe failed: {}", e);
                false
            }
        }
    }
}
