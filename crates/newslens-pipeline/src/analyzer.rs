//! Session-holding orchestrator

use crate::error::AnalysisError;
use crate::url::normalize_url;
use newslens_domain::{CompletionProvider, ImpactRecord};
use newslens_extractor::{Extractor, ExtractorConfig};
use newslens_fetch::Fetcher;
use std::time::Instant;
use tracing::info;

/// Credential side of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No validated credential held
    AwaitingCredential,
    /// A validated credential is held for the rest of the session
    Ready,
}

/// Result of one analysis run. Discarded after display/export; runs share
/// nothing with each other.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The normalized URL that was fetched
    pub url: String,
    /// Validated impact records, in model order
    pub records: Vec<ImpactRecord>,
    /// Run metadata
    pub metadata: AnalysisMetadata,
}

/// Metadata about one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisMetadata {
    /// Characters of normalized page text handed to the extractor
    pub content_chars: usize,
    /// Whether the page text was cut at the maximum content length
    pub content_truncated: bool,
    /// Wall-clock time for the whole run
    pub processing_time_ms: u64,
}

/// Sequences fetch → extract and owns the session credential slot.
///
/// The credential (wrapped in its provider) is the only session state;
/// it is set by `authenticate`, read by every run, and dropped only by
/// the explicit `clear_credential` action.
pub struct Analyzer<P: CompletionProvider> {
    fetcher: Fetcher,
    extractor_config: ExtractorConfig,
    extractor: Option<Extractor<P>>,
}

impl<P: CompletionProvider> Analyzer<P> {
    /// Create an analyzer in the `AwaitingCredential` state
    pub fn new(fetcher: Fetcher, extractor_config: ExtractorConfig) -> Self {
        Self {
            fetcher,
            extractor_config,
            extractor: None,
        }
    }

    /// Current credential state
    pub fn state(&self) -> SessionState {
        if self.extractor.is_some() {
            SessionState::Ready
        } else {
            SessionState::AwaitingCredential
        }
    }

    /// Validate a candidate credential (via the provider's probe call) and,
    /// on success, hold it for the rest of the session.
    ///
    /// On rejection the previously held credential, if any, is untouched.
    pub async fn authenticate(&mut self, candidate: P) -> Result<(), AnalysisError> {
        if !candidate.validate().await {
            return Err(AnalysisError::InvalidCredential);
        }
        self.extractor = Some(Extractor::new(candidate, self.extractor_config.clone()));
        info!("credential validated; session ready");
        Ok(())
    }

    /// Discard the held credential and return to `AwaitingCredential`.
    pub fn clear_credential(&mut self) {
        self.extractor = None;
        info!("credential cleared");
    }

    /// Run one analysis: normalize the URL, fetch the page, extract
    /// records. Takes `&mut self` so a run borrows the analyzer
    /// exclusively; overlapping runs for the same session cannot be
    /// issued.
    pub async fn analyze(&mut self, url: &str) -> Result<Analysis, AnalysisError> {
        let extractor = self
            .extractor
            .as_ref()
            .ok_or(AnalysisError::NotAuthenticated)?;

        let start = Instant::now();
        let url = normalize_url(url);

        let content = self.fetcher.fetch(&url).await?;
        let records = extractor.extract(&content.text).await?;

        let metadata = AnalysisMetadata {
            content_chars: content.text.chars().count(),
            content_truncated: content.truncated,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "analysis of {} complete: {} records in {}ms",
            url,
            records.len(),
            metadata.processing_time_ms
        );

        Ok(Analysis {
            url,
            records,
            metadata,
        })
    }
}
