//! Error types for the extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Completion-service call failed
    #[error("completion service error: {0}")]
    Service(String),

    /// Service returned nothing
    #[error("empty response from completion service")]
    EmptyResponse,

    /// The reply contained no bracket-delimited array at all
    #[error("no JSON array found in response")]
    NoJsonArray,

    /// The located substring was not a valid JSON array
    #[error("invalid JSON in response: {0}")]
    InvalidJson(String),

    /// The completion call exceeded its time bound
    #[error("extraction timed out after {0}s")]
    Timeout(u64),
}
