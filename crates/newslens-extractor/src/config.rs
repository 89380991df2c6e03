//! Configuration for the extractor

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum output token budget for the completion call
    pub max_output_tokens: u32,

    /// Sampling temperature; kept low to favor precision over creativity
    pub temperature: f32,

    /// Maximum time for a single completion call (seconds)
    pub completion_timeout_secs: u64,
}

impl ExtractorConfig {
    /// Get the completion timeout as a Duration
    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_output_tokens == 0 {
            return Err("max_output_tokens must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!("temperature {} out of range [0.0, 2.0]", self.temperature));
        }
        if self.completion_timeout_secs == 0 {
            return Err("completion_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: 1000,
            temperature: 0.3,
            completion_timeout_secs: 60,
        }
    }
}
