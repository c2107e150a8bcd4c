//! Gemini transport tests against a mock HTTP server.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use asmr_gemini::{
    AnalysisClient, AnalysisError, GeminiConfig, GeminiTransport, GenerateRequest,
    ModelTransport, TransportError,
};
use asmr_models::{GroundingStrategy, Trigger};

const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

fn config_for(server: &MockServer, strategy: GroundingStrategy) -> GeminiConfig {
    let mut config = GeminiConfig::new("test-key");
    config.base_url = server.uri();
    config.strategy = strategy;
    config
}

fn candidate_reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP",
            "groundingMetadata": {
                "groundingChunks": [
                    {"web": {"uri": "https://www.reddit.com/r/asmr/abc", "title": "reddit.com"}},
                    {"web": {"uri": "https://example.com/no-title"}}
                ]
            }
        }]
    })
}

#[tokio::test]
async fn test_search_grounded_analysis_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({"tools": [{"googleSearch": {}}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_reply(
            "```json\n[{\"trigger\":\"Tapping on glass\",\"timestamp\":\"01:23\"},{\"trigger\":\"Whispering\",\"timestamp\":341}]\n```",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server, GroundingStrategy::SearchGrounded);
    let client = AnalysisClient::from_config(&config).unwrap();
    let result = client.analyze(VIDEO_URL).await.unwrap();

    assert_eq!(
        result.triggers,
        vec![
            Trigger::new("Tapping on glass", "01:23"),
            Trigger::new("Whispering", 341i64),
        ]
    );
    assert_eq!(result.sources.len(), 2);
    assert_eq!(result.renderable_sources().count(), 1);
}

#[tokio::test]
async fn test_direct_video_sends_file_reference() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"fileData": {"fileUri": VIDEO_URL}}]}],
            "generationConfig": {"responseMimeType": "application/json"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "[]"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server, GroundingStrategy::DirectVideo);
    let client = AnalysisClient::from_config(&config).unwrap();
    let result = client.analyze(VIDEO_URL).await.unwrap();
    assert!(result.triggers.is_empty());
    assert!(result.sources.is_empty());
}

#[tokio::test]
async fn test_service_error_is_reported_as_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let config = config_for(&server, GroundingStrategy::SearchGrounded);
    let transport = GeminiTransport::new(&config).unwrap();
    let request = GenerateRequest {
        prompt: "hello".to_string(),
        ..Default::default()
    };

    let err = transport.generate(&request).await.unwrap_err();
    assert!(matches!(
        err,
        TransportError::Status { status: 503, ref body } if body == "overloaded"
    ));
}

#[tokio::test]
async fn test_client_hides_failure_cause() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate_reply("Sorry, I can't help with that.")),
        )
        .mount(&server)
        .await;

    let config = config_for(&server, GroundingStrategy::SearchOnly);
    let client = AnalysisClient::from_config(&config).unwrap();
    assert_eq!(client.analyze(VIDEO_URL).await, Err(AnalysisError::Failed));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let config = config_for(&server, GroundingStrategy::SearchGrounded);
    let transport = GeminiTransport::new(&config).unwrap();
    let err = transport
        .generate(&GenerateRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)));
}
