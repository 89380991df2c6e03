//! Fetched page content

/// Normalized plain text produced by the fetcher, consumed once by the
/// extractor. Not retained across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContent {
    /// Visible page text, whitespace-collapsed
    pub text: String,

    /// Whether the text was cut at the maximum content length. The cut is
    /// a hard character cut, so downstream consumers must tolerate
    /// mid-sentence endings.
    pub truncated: bool,
}

impl RawContent {
    /// Build content from already-normalized text, truncating to
    /// `max_length` characters when necessary.
    pub fn new(text: String, max_length: usize) -> Self {
        if text.chars().count() > max_length {
            Self {
                text: text.chars().take(max_length).collect(),
                truncated: true,
            }
        } else {
            Self {
                text,
                truncated: false,
            }
        }
    }
}
