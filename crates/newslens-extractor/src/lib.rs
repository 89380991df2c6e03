//! Newslens Impact Extractor
//!
//! Converts page text into structured company-impact records using a
//! completion service.
//!
//! # Architecture
//!
//! ```text
//! Text → PromptBuilder → CompletionProvider → parser → ImpactRecords
//! ```
//!
//! The model reply is never trusted: the parser locates the JSON array
//! inside free-form text, and every parsed element passes a field-domain
//! check before becoming a record. Malformed elements are dropped (and
//! logged), not allowed to fail the batch.
//!
//! # Example
//!
//! ```
//! use newslens_extractor::{Extractor, ExtractorConfig};
//! use newslens_llm::MockProvider;
//!
//! # async fn example() -> Result<(), newslens_extractor::ExtractError> {
//! let llm = MockProvider::new("[]");
//! let extractor = Extractor::new(llm, ExtractorConfig::default());
//!
//! let records = extractor.extract("RBI cut the repo rate today.").await?;
//! assert!(records.is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;


pub use config::ExtractorConfig;
pub use error::ExtractError;
pub use extractor::Extractor;
pub use prompt::{PromptBuilder, SYSTEM_ROLE};
