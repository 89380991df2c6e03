//! Newslens Content Fetcher
//!
//! Retrieves a web page and reduces it to normalized plain text for the
//! extractor.
//!
//! # Behavior
//!
//! - One HTTP GET with a fixed browser `User-Agent` and a client-level
//!   timeout; any transport failure or non-2xx status is terminal for the
//!   request (no retries)
//! - The HTML body is reduced to visible text (script/style content
//!   discarded), whitespace runs are collapsed, and the result is
//!   hard-truncated to the configured maximum length
//!
//! # Examples
//!
//! ```no_run
//! use newslens_fetch::{FetchConfig, Fetcher};
//!
//! # async fn example() -> Result<(), newslens_fetch::FetchError> {
//! let fetcher = Fetcher::new(FetchConfig::default());
//! let content = fetcher.fetch("https://example.com/news").await?;
//! println!("{} chars, truncated: {}", content.text.len(), content.truncated);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

use newslens_domain::RawContent;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default request timeout (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default maximum content length in characters, chosen for downstream
/// completion cost/latency control
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 4000;

/// Identifying header sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Rendering width handed to html2text. The output is whitespace-collapsed
/// afterwards, so the exact value only affects intermediate line breaks.
const RENDER_WIDTH: usize = 80;

/// Errors that can occur while fetching page content
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connection, DNS, timeout)
    #[error("request failed: {0}")]
    Request(String),

    /// Server answered with a non-success status
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Body could not be reduced to text
    #[error("could not reduce page to text: {0}")]
    Html(String),
}

/// Fetcher configuration
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Maximum characters of normalized text to keep
    pub max_content_length: usize,

    /// User-Agent header value
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Fetches a page and reduces it to normalized plain text
pub struct Fetcher {
    client: reqwest::Client,
    max_content_length: usize,
}

impl Fetcher {
    /// Create a new fetcher with the given configuration
    pub fn new(config: FetchConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .unwrap();

        Self {
            client,
            max_content_length: config.max_content_length,
        }
    }

    /// Fetch a URL and return its normalized visible text
    ///
    /// # Errors
    ///
    /// Returns error if the request fails at the transport level, the
    /// server answers with a non-2xx status, or the body cannot be reduced
    /// to text. A single failed attempt is terminal for the request.
    pub async fn fetch(&self, url: &str) -> Result<RawContent, FetchError> {
        debug!("fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let text = visible_text(&body)?;
        let content = RawContent::new(collapse_whitespace(&text), self.max_content_length);

        debug!(
            "fetched {} chars (truncated: {})",
            content.text.chars().count(),
            content.truncated
        );

        Ok(content)
    }
}

/// Reduce an HTML document to its visible text. Script and style content
/// is not rendered.
fn visible_text(html: &str) -> Result<String, FetchError> {
    html2text::from_read(html.as_bytes(), RENDER_WIDTH)
        .map_err(|e| FetchError::Html(e.to_string()))
}

/// Collapse all runs of whitespace (including newlines from the text
/// rendering) into single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a  b\n\nc\t d"), "a b c d");
        assert_eq!(collapse_whitespace("  leading and trailing  "), "leading and trailing");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_visible_text_drops_script_and_style() {
        let html = r#"<html><head>
            <style>body { color: red; } .secret-style { display: none; }</style>
            <script>var secretScript = "should never appear";</script>
        </head><body><p>Markets rallied today.</p></body></html>"#;

        let text = visible_text(html).unwrap();
        assert!(text.contains("Markets rallied today."));
        assert!(!text.contains("secretScript"));
        assert!(!text.contains("secret-style"));
        assert!(!text.contains("color: red"));
    }

    #[test]
    fn test_visible_text_joins_block_elements() {
        let html = "<html><body><h1>Headline</h1><p>First.</p><p>Second.</p></body></html>";
        let normalized = collapse_whitespace(&visible_text(html).unwrap());
        assert!(normalized.contains("Headline"));
        assert!(normalized.contains("First."));
        assert!(normalized.contains("Second."));
        // No newlines survive normalization
        assert!(!normalized.contains('\n'));
    }
}
