//! HTTP-level fetcher tests against a local mock server

use newslens_fetch::{FetchConfig, FetchError, Fetcher, DEFAULT_USER_AGENT};
use wiremock::matchers::{headers, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_page(html: &str) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html.to_string())
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn test_fetch_extracts_visible_text() {
    let server = mock_page(
        "<html><body><h1>RBI cuts rates</h1><p>Banks expected to benefit.</p></body></html>",
    )
    .await;

    let fetcher = Fetcher::new(FetchConfig::default());
    let content = fetcher
        .fetch(&format!("{}/article", server.uri()))
        .await
        .unwrap();

    assert!(content.text.contains("RBI cuts rates"));
    assert!(content.text.contains("Banks expected to benefit."));
    assert!(!content.truncated);
}

#[tokio::test]
async fn test_fetch_strips_script_and_style_blocks() {
    let server = mock_page(
        r#"<html><head><script>trackUser("abc123");</script>
        <style>.hidden { display: none; }</style></head>
        <body><p>Visible sentence.</p></body></html>"#,
    )
    .await;

    let fetcher = Fetcher::new(FetchConfig::default());
    let content = fetcher
        .fetch(&format!("{}/article", server.uri()))
        .await
        .unwrap();

    assert!(content.text.contains("Visible sentence."));
    assert!(!content.text.contains("trackUser"));
    assert!(!content.text.contains("display: none"));
}

#[tokio::test]
async fn test_fetch_sends_browser_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/article"))
        // wiremock splits received header values on commas, so a value
        // containing "KHTML, like Gecko" must be matched via `headers`
        // with the same split applied to the expected value.
        .and(headers(
            "user-agent",
            DEFAULT_USER_AGENT.split(',').map(str::trim).collect(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>ok</p>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(FetchConfig::default());
    fetcher
        .fetch(&format!("{}/article", server.uri()))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_fetch_truncates_to_max_length() {
    let long_paragraph = format!("<p>{}</p>", "word ".repeat(2000));
    let server = mock_page(&format!("<html><body>{}</body></html>", long_paragraph)).await;

    let config = FetchConfig {
        max_content_length: 100,
        ..FetchConfig::default()
    };
    let fetcher = Fetcher::new(config);
    let content = fetcher
        .fetch(&format!("{}/article", server.uri()))
        .await
        .unwrap();

    assert_eq!(content.text.chars().count(), 100);
    assert!(content.truncated);
}

#[tokio::test]
async fn test_fetch_non_success_status_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(FetchConfig::default());
    let result = fetcher.fetch(&format!("{}/missing", server.uri())).await;

    match result {
        Err(FetchError::Status(404)) => {}
        other => panic!("expected Status(404), got {:?}", other.map(|c| c.text)),
    }
}

#[tokio::test]
async fn test_fetch_transport_failure_is_error() {
    // Nothing listens on this port
    let fetcher = Fetcher::new(FetchConfig::default());
    let result = fetcher.fetch("http://127.0.0.1:9/unreachable").await;

    assert!(matches!(result, Err(FetchError::Request(_))));
}
