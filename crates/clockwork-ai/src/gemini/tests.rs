use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::content::{Content, Part, Role, ToolCall, ToolResponse};
use crate::tools::builtin_tools;
use crate::{AiClient, AiError, ModelRequest};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

async fn client_for(server: &MockServer) -> GeminiClient {
    let config =
        GeminiConfig::new("test-key").with_base_url(format!("{}/v1beta/models/", server.uri()));
    GeminiClient::new(config).unwrap()
}

fn time_request() -> ModelRequest {
    ModelRequest {
        system_instruction: Some("Use the tool.".into()),
        contents: vec![Content::user_text("What time is it?")],
        tools: builtin_tools(),
    }
}

#[test]
fn debug_redacts_api_key() {
    let config = GeminiConfig::new("super-secret");
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("[REDACTED]"));
}

#[test]
fn request_body_maps_roles_tools_and_instruction() {
    let client = GeminiClient::new(GeminiConfig::new("k")).unwrap();
    let request = ModelRequest {
        system_instruction: Some("Be precise.".into()),
        contents: vec![
            Content::user_text("What time is it?"),
            Content {
                role: Role::Model,
                parts: vec![Part::FunctionCall(ToolCall {
                    id: "c1".into(),
                    name: "get_current_time".into(),
                    arguments: json!({}),
                })],
            },
            Content {
                role: Role::User,
                parts: vec![Part::FunctionResponse(ToolResponse {
                    id: "c1".into(),
                    name: "get_current_time".into(),
                    response: json!({ "status": "success", "time": "14:30" }),
                })],
            },
        ],
        tools: builtin_tools(),
    };

    let body = client.build_request_body(&request);
    assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be precise.");
    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["contents"][1]["role"], "model");
    assert_eq!(
        body["contents"][1]["parts"][0]["functionCall"]["name"],
        "get_current_time"
    );
    assert_eq!(
        body["contents"][2]["parts"][0]["functionResponse"]["response"]["time"],
        "14:30"
    );
    assert_eq!(
        body["tools"][0]["functionDeclarations"][0]["name"],
        "get_current_time"
    );
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 4096);
}

#[test]
fn request_body_omits_empty_sections() {
    let client = GeminiClient::new(GeminiConfig::new("k")).unwrap();
    let body = client.build_request_body(&ModelRequest {
        contents: vec![Content::user_text("hi")],
        ..ModelRequest::default()
    });
    assert!(body.get("tools").is_none());
    assert!(body.get("systemInstruction").is_none());
}

#[tokio::test]
async fn parses_function_call_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "systemInstruction": { "parts": [{ "text": "Use the tool." }] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "functionCall": { "name": "get_current_time", "args": {} } }]
                }
            }],
            "usageMetadata": { "promptTokenCount": 42, "candidatesTokenCount": 5 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.generate_content(&time_request()).await.unwrap();

    assert_eq!(response.content.role, Role::Model);
    let calls: Vec<_> = response.content.function_calls().collect();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name, "get_current_time");
    assert!(!calls[0].id.is_empty());
    assert_eq!(response.usage.input_tokens, 42);
    assert_eq!(response.usage.total_tokens(), 47);
}

#[tokio::test]
async fn parses_text_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "It is 14:30." }] }
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.generate_content(&time_request()).await.unwrap();
    assert_eq!(response.content.text(), "It is 14:30.");
    assert_eq!(response.usage.total_tokens(), 0);
}

#[tokio::test]
async fn thought_parts_are_dropped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "The user wants the time, so I answer.", "thought": true },
                        { "text": "It is 09:15." }
                    ]
                }
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.generate_content(&time_request()).await.unwrap();
    assert_eq!(response.content.parts, vec![Part::Text("It is 09:15.".into())]);
}

#[tokio::test]
async fn blocked_candidate_yields_empty_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.generate_content(&time_request()).await.unwrap();
    assert!(response.content.parts.is_empty());
}

#[tokio::test]
async fn missing_candidates_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "promptFeedback": {} })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.generate_content(&time_request()).await.unwrap_err();
    assert!(matches!(err, AiError::ParseError(_)));
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.generate_content(&time_request()).await.unwrap_err();
    assert!(matches!(err, AiError::RateLimited));
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.generate_content(&time_request()).await.unwrap_err();
    match err {
        AiError::ApiError(msg) => {
            assert!(msg.contains("400"), "got: {msg}");
            assert!(msg.contains("API key not valid"), "got: {msg}");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}
