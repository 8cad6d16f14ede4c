use super::*;

fn test_client(base_url: &str) -> SerpApiClient {
    SerpApiClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_url_constructs_search_query() {
    let client = test_client("https://serpapi.com");
    let url = client.build_url("google_trends_trending_now", &[]);
    assert_eq!(
        url.as_str(),
        "https://serpapi.com/search.json?engine=google_trends_trending_now&api_key=test-key"
    );
}

#[test]
fn build_url_keeps_base_path_with_trailing_slash() {
    let client = test_client("http://localhost:9000/serp/");
    let url = client.build_url("google_trends", &[("q", "iced coffee"), ("cat", "71")]);
    assert_eq!(
        url.as_str(),
        "http://localhost:9000/serp/search.json?engine=google_trends&q=iced+coffee&cat=71&api_key=test-key"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("https://serpapi.com");
    let url = client.build_url("google_trends", &[("q", "mac & cheese")]);
    assert!(
        url.as_str().contains("mac+%26+cheese") || url.as_str().contains("mac%20%26%20cheese"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = SerpApiClient::with_base_url("test-key", 30, "not a url");
    assert!(matches!(result, Err(SerpApiError::InvalidBaseUrl { .. })));
}

#[test]
fn check_api_error_reads_error_field() {
    let body = serde_json::json!({ "error": "Invalid API key." });
    let err = SerpApiClient::check_api_error(&body).unwrap_err();
    assert!(matches!(err, SerpApiError::ApiError(ref m) if m == "Invalid API key."));

    let ok = serde_json::json!({ "search_metadata": {} });
    assert!(SerpApiClient::check_api_error(&ok).is_ok());
}
