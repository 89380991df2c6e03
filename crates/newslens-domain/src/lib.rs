//! Newslens Domain Layer
//!
//! Core types and trait seams for the news impact analysis pipeline.
//! This crate carries almost no dependencies (serde, because the impact
//! record's serialized key names are the export contract, and tracing
//! for the provider trait's probe diagnostics) and defines the value
//! objects all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **ImpactRecord**: one structured assessment of a company's exposure
//!   to analyzed content, produced only by the extractor
//! - **RawContent**: normalized page text handed from fetcher to extractor
//! - **ApiKey**: the opaque credential authorizing completion calls
//! - **CompletionProvider**: the trait seam to the completion service,
//!   implemented by the infrastructure layer (newslens-llm)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod content;
pub mod credential;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use content::RawContent;
pub use credential::ApiKey;
pub use record::{ImpactRecord, ImpactType, Listed, MAX_IMPACT_SCORE};
pub use traits::{CompletionProvider, CompletionRequest};
