//! Error types for the pipeline

use newslens_extractor::ExtractError;
use newslens_fetch::FetchError;
use thiserror::Error;

/// Pipeline stage at which a run failed, for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Credential validation
    Credential,
    /// Page retrieval
    Fetch,
    /// Model extraction
    Extract,
}

impl Stage {
    /// Human-readable stage name
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Credential => "credential validation",
            Stage::Fetch => "fetch",
            Stage::Extract => "extraction",
        }
    }
}

/// Errors surfaced by the orchestrator
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Page retrieval failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Extraction failed
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),

    /// The validator rejected the candidate credential
    #[error("credential rejected by completion service")]
    InvalidCredential,

    /// An analysis was requested with no validated credential in session
    #[error("no validated credential in session")]
    NotAuthenticated,
}

impl AnalysisError {
    /// The stage at which this error originated
    pub fn stage(&self) -> Stage {
        match self {
            AnalysisError::Fetch(_) => Stage::Fetch,
            AnalysisError::Extract(_) => Stage::Extract,
            AnalysisError::InvalidCredential | AnalysisError::NotAuthenticated => Stage::Credential,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_tagging() {
        let err = AnalysisError::Fetch(FetchError::Status(404));
        assert_eq!(err.stage(), Stage::Fetch);
        assert_eq!(err.stage().name(), "fetch");

        let err = AnalysisError::Extract(ExtractError::NoJsonArray);
        assert_eq!(err.stage(), Stage::Extract);

        assert_eq!(AnalysisError::InvalidCredential.stage(), Stage::Credential);
        assert_eq!(AnalysisError::NotAuthenticated.stage(), Stage::Credential);
    }
}
