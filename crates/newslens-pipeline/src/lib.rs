//! Newslens Pipeline Orchestrator
//!
//! Sequences the fetcher and extractor for one analysis run and owns the
//! single piece of session state: the validated completion-service
//! credential.
//!
//! # Session flow
//!
//! ```text
//! AwaitingCredential --authenticate()--> Ready --clear_credential()--> AwaitingCredential
//!                                          |
//!                                     analyze(url)  (repeatable; runs are independent)
//! ```
//!
//! Failures at any stage short-circuit the run and come back tagged with
//! the stage that failed; nothing is fatal to the session and the caller
//! may always retry with a new URL or a new credential.
//!
//! # Example
//!
//! ```
//! use newslens_pipeline::{Analyzer, SessionState};
//! use newslens_fetch::{FetchConfig, Fetcher};
//! use newslens_extractor::ExtractorConfig;
//! use newslens_llm::MockProvider;
//!
//! # async fn example() -> Result<(), newslens_pipeline::AnalysisError> {
//! let fetcher = Fetcher::new(FetchConfig::default());
//! let mut analyzer = Analyzer::new(fetcher, ExtractorConfig::default());
//! assert_eq!(analyzer.state(), SessionState::AwaitingCredential);
//!
//! analyzer.authenticate(MockProvider::new("[]")).await?;
//! let analysis = analyzer.analyze("example.com/news").await?;
//! println!("{} records from {}", analysis.records.len(), analysis.url);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod error;
mod url;

pub use analyzer::{Analysis, AnalysisMetadata, Analyzer, SessionState};
pub use error::{AnalysisError, Stage};
pub use url::normalize_url;
