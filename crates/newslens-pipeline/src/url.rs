//! URL normalization for user-supplied links

/// Prepend `https://` when the input lacks an explicit scheme.
///
/// Users paste links without schemes; everything else about the URL is
/// left for the HTTP client to judge.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemeless_url_gets_https() {
        assert_eq!(normalize_url("example.com/a"), "https://example.com/a");
    }

    #[test]
    fn test_https_url_unchanged() {
        assert_eq!(
            normalize_url("https://example.com/a"),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_http_url_unchanged() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(
            normalize_url("  example.com/news \n"),
            "https://example.com/news"
        );
    }
}
