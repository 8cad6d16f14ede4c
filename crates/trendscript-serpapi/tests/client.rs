//! Integration tests for `SerpApiClient` using wiremock HTTP mocks.

use trendscript_serpapi::{SerpApiClient, SerpApiError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> SerpApiClient {
    SerpApiClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

fn related_topics_body() -> serde_json::Value {
    serde_json::json!({
        "search_metadata": { "status": "Success" },
        "csv": [
            "Category: Food & Drink",
            "",
            "TOP",
            "Coffee,100",
            "Tea,+20%",
            "",
            "RISING",
            "Matcha,Breakout"
        ]
    })
}

fn trending_now_body() -> serde_json::Value {
    serde_json::json!({
        "search_metadata": { "status": "Success" },
        "trending_searches": [
            { "title": { "query": "Autumn" } },
            { "title": { "query": "Dalgona coffee" } }
        ]
    })
}

async fn mount_related_topics(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("engine", "google_trends"))
        .and(query_param("q", "iced coffee"))
        .and(query_param("cat", "71"))
        .and(query_param("data_type", "RELATED_TOPICS"))
        .and(query_param("date", "today 1-m"))
        .and(query_param("gprop", "youtube"))
        .and(query_param("csv", "true"))
        .and(query_param("api_key", "test-key"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mount_trending_now(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("engine", "google_trends_trending_now"))
        .and(query_param("api_key", "test-key"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_related_topics_parses_csv_sections() {
    let server = MockServer::start().await;
    mount_related_topics(
        &server,
        ResponseTemplate::new(200).set_body_json(related_topics_body()),
    )
    .await;

    let client = test_client(&server.uri());
    let trends = client
        .fetch_related_topics("iced coffee", "71")
        .await
        .expect("should parse related topics");

    assert_eq!(trends.top, vec!["Coffee", "Tea"]);
    assert_eq!(trends.rising, vec!["Matcha"]);
}

#[tokio::test]
async fn fetch_related_topics_surfaces_api_error() {
    let server = MockServer::start().await;
    mount_related_topics(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({ "error": "Google Trends hasn't returned any results." })),
    )
    .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_related_topics("iced coffee", "71")
        .await
        .expect_err("error field should fail the call");
    assert!(matches!(err, SerpApiError::ApiError(_)), "got: {err:?}");
}

#[tokio::test]
async fn fetch_trending_now_returns_queries() {
    let server = MockServer::start().await;
    mount_trending_now(
        &server,
        ResponseTemplate::new(200).set_body_json(trending_now_body()),
    )
    .await;

    let client = test_client(&server.uri());
    let trends = client
        .fetch_trending_now()
        .await
        .expect("should parse trending now");
    assert_eq!(trends, vec!["Autumn", "Dalgona coffee"]);
}

#[tokio::test]
async fn fetch_trending_now_rejects_non_json_body() {
    let server = MockServer::start().await;
    mount_trending_now(&server, ResponseTemplate::new(200).set_body_string("<html>")).await;

    let client = test_client(&server.uri());
    let err = client.fetch_trending_now().await.expect_err("not json");
    assert!(matches!(err, SerpApiError::Deserialize { .. }), "got: {err:?}");
}

#[tokio::test]
async fn fetch_trends_combines_both_sources() {
    let server = MockServer::start().await;
    mount_related_topics(
        &server,
        ResponseTemplate::new(200).set_body_json(related_topics_body()),
    )
    .await;
    mount_trending_now(
        &server,
        ResponseTemplate::new(200).set_body_json(trending_now_body()),
    )
    .await;

    let client = test_client(&server.uri());
    let data = client.fetch_trends("iced coffee", "71").await;

    assert_eq!(data.category_trends.top, vec!["Coffee", "Tea"]);
    assert_eq!(data.category_trends.rising, vec!["Matcha"]);
    assert_eq!(data.global_trends, vec!["Autumn", "Dalgona coffee"]);
}

#[tokio::test]
async fn fetch_trends_degrades_failed_category_half_to_empty() {
    let server = MockServer::start().await;
    mount_related_topics(&server, ResponseTemplate::new(500)).await;
    mount_trending_now(
        &server,
        ResponseTemplate::new(200).set_body_json(trending_now_body()),
    )
    .await;

    let client = test_client(&server.uri());
    let data = client.fetch_trends("iced coffee", "71").await;

    assert!(data.category_trends.is_empty());
    assert_eq!(data.global_trends, vec!["Autumn", "Dalgona coffee"]);
}

#[tokio::test]
async fn fetch_trends_degrades_global_error_field_to_empty() {
    let server = MockServer::start().await;
    mount_related_topics(
        &server,
        ResponseTemplate::new(200).set_body_json(related_topics_body()),
    )
    .await;
    mount_trending_now(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "error": "quota exhausted" })),
    )
    .await;

    let client = test_client(&server.uri());
    let data = client.fetch_trends("iced coffee", "71").await;

    assert_eq!(data.category_trends.top, vec!["Coffee", "Tea"]);
    assert!(data.global_trends.is_empty());
}

#[tokio::test]
async fn fetch_trends_with_both_halves_failing_is_empty_not_error() {
    let server = MockServer::start().await;
    mount_related_topics(&server, ResponseTemplate::new(503)).await;
    mount_trending_now(&server, ResponseTemplate::new(401)).await;

    let client = test_client(&server.uri());
    let data = client.fetch_trends("iced coffee", "71").await;

    assert!(data.category_trends.is_empty());
    assert!(data.global_trends.is_empty());
}
