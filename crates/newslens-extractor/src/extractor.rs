//! Core extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::parser::parse_reply;
use crate::prompt::{PromptBuilder, SYSTEM_ROLE};
use newslens_domain::{CompletionProvider, CompletionRequest, ImpactRecord};
use tokio::time::timeout;
use tracing::{debug, info};

/// Converts page text into validated impact records via a completion
/// provider. One completion call per extraction; no retries.
pub struct Extractor<P: CompletionProvider> {
    provider: P,
    config: ExtractorConfig,
}

impl<P: CompletionProvider> Extractor<P> {
    /// Create a new extractor over the given provider
    pub fn new(provider: P, config: ExtractorConfig) -> Self {
        Self { provider, config }
    }

    /// Extract impact records from page text
    ///
    /// # Errors
    ///
    /// - `Service` if the completion call fails
    /// - `Timeout` if it exceeds the configured bound
    /// - `EmptyResponse` / `NoJsonArray` / `InvalidJson` per the parsing
    ///   policy in [`crate::ExtractError`]
    pub async fn extract(&self, content: &str) -> Result<Vec<ImpactRecord>, ExtractError> {
        let prompt = PromptBuilder::new(content).build();
        debug!("prompt length: {} chars", prompt.chars().count());

        let request = CompletionRequest {
            system: Some(SYSTEM_ROLE.to_string()),
            prompt,
            max_tokens: self.config.max_output_tokens,
            temperature: self.config.temperature,
        };

        let reply = timeout(self.config.completion_timeout(), self.provider.complete(&request))
            .await
            .map_err(|_| ExtractError::Timeout(self.config.completion_timeout_secs))?
            .map_err(|e| ExtractError::Service(e.to_string()))?;

        debug!("reply length: {} chars", reply.chars().count());

        let records = parse_reply(&reply)?;
        info!("extracted {} impact records", records.len());

        Ok(records)
    }
}
