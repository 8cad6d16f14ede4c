//! Integration tests for `GeminiClient` and `LlmService` using wiremock.

use trendscript_core::{aggregate_candidates, TrendCandidates};
use trendscript_llm::{EnvelopeError, GeminiClient, LlmError, LlmService};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UTILITY_PATH: &str = "/v1beta/models/utility-model:generateContent";
const CREATIVE_PATH: &str = "/v1beta/models/creative-model:generateContent";

fn reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [
            { "content": { "role": "model", "parts": [ { "text": text } ] } }
        ]
    }))
}

fn test_service(base_url: &str) -> LlmService {
    let client = GeminiClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail");
    LlmService::new(client, "utility-model", "creative-model")
}

fn candidates(items: &[&str]) -> TrendCandidates {
    let list: Vec<String> = items.iter().map(|s| (*s).to_string()).collect();
    aggregate_candidates([&list], 25)
}

#[tokio::test]
async fn generate_sends_prompt_and_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UTILITY_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_string_contains("hello gemini"))
        .respond_with(reply("hi there"))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", 30, &server.uri()).expect("client");
    let text = client
        .generate("utility-model", "hello gemini")
        .await
        .expect("generate should succeed");
    assert_eq!(text, "hi there");
}

#[tokio::test]
async fn generate_maps_error_status_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UTILITY_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", 30, &server.uri()).expect("client");
    let err = client.generate("utility-model", "x").await.unwrap_err();
    assert!(
        matches!(err, LlmError::Status { status: 400, ref message } if message == "API key not valid."),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn generate_without_candidates_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UTILITY_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } })),
        )
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", 30, &server.uri()).expect("client");
    let err = client.generate("utility-model", "x").await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse), "got: {err:?}");
}

#[tokio::test]
async fn extract_keyword_lowercases_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UTILITY_PATH))
        .and(body_string_contains("extract the single most important noun"))
        .respond_with(reply("  Iced Coffee\n"))
        .mount(&server)
        .await;

    let service = test_service(&server.uri());
    let keyword = service
        .extract_keyword("A fun TikTok about iced coffee")
        .await
        .expect("keyword");
    assert_eq!(keyword, "iced coffee");
}

#[tokio::test]
async fn extract_keyword_rejects_oversized_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UTILITY_PATH))
        .respond_with(reply(&"x".repeat(80)))
        .mount(&server)
        .await;

    let service = test_service(&server.uri());
    let err = service.extract_keyword("idea").await.unwrap_err();
    assert!(matches!(err, LlmError::InvalidKeyword(_)), "got: {err:?}");
}

#[tokio::test]
async fn generate_viral_angle_parses_fenced_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UTILITY_PATH))
        .and(body_string_contains("Dalgona coffee"))
        .respond_with(reply(
            "```json\n{\"selected_trends\": [\"Dalgona coffee\"], \"viral_angle\": \"Whip a Dalgona iced coffee\"}\n```",
        ))
        .mount(&server)
        .await;

    let service = test_service(&server.uri());
    let angle = service
        .generate_viral_angle("iced coffee is better", &candidates(&["Dalgona coffee", "Autumn"]))
        .await
        .expect("angle");
    assert_eq!(angle.viral_angle, "Whip a Dalgona iced coffee");
    assert_eq!(angle.selected_trends, vec!["Dalgona coffee"]);
}

#[tokio::test]
async fn generate_viral_angle_with_no_candidates_skips_the_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(reply("unused"))
        .expect(0)
        .mount(&server)
        .await;

    let service = test_service(&server.uri());
    let angle = service
        .generate_viral_angle("bake sourdough", &TrendCandidates::default())
        .await
        .expect("passthrough");
    assert_eq!(angle.viral_angle, "bake sourdough");
    assert!(angle.selected_trends.is_empty());
}

#[tokio::test]
async fn generate_viral_angle_rejects_reply_without_angle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UTILITY_PATH))
        .respond_with(reply(r#"{"selected_trends": ["Autumn"]}"#))
        .mount(&server)
        .await;

    let service = test_service(&server.uri());
    let err = service
        .generate_viral_angle("idea", &candidates(&["Autumn"]))
        .await
        .unwrap_err();
    assert!(
        matches!(err, LlmError::Envelope(EnvelopeError::MissingViralAngle)),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn generate_script_uses_creative_model_and_trims() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CREATIVE_PATH))
        .and(body_string_contains("Viral Angle / Core Instruction"))
        .respond_with(reply("\n\nSCENE 1: A frosty glass.\n#icedcoffee\n\n"))
        .expect(1)
        .mount(&server)
        .await;

    let service = test_service(&server.uri());
    let script = service
        .generate_script("Contrast hot and iced coffee")
        .await
        .expect("script");
    assert_eq!(script, "SCENE 1: A frosty glass.\n#icedcoffee");
}

#[tokio::test]
async fn generate_script_blank_reply_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CREATIVE_PATH))
        .respond_with(reply("   "))
        .mount(&server)
        .await;

    let service = test_service(&server.uri());
    let err = service.generate_script("angle").await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse), "got: {err:?}");
}
