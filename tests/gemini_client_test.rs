//! HTTP contract of the generative language client, against a mock server.

mod common;

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sentinel::domain::models::{
    structured_result_schema, AnalysisRequest, AnalysisResult, GeminiConfig, Language, Module,
};
use sentinel::domain::ports::{ModelCall, ModelClient, ResponseFormat};
use sentinel::infrastructure::gemini::{GeminiClient, API_KEY_HEADER};
use sentinel::services::{classify, AnalysisService, FailureClass};
use sentinel::AnalysisError;

const MODEL: &str = "gemini-flash-latest";
const KEY: &str = "test-api-key";

fn client_for(server: &MockServer) -> GeminiClient {
    let config = GeminiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        ..GeminiConfig::default()
    };
    GeminiClient::new(&config).unwrap()
}

fn endpoint(model: &str) -> String {
    format!("/v1beta/models/{model}:generateContent")
}

fn call(response_format: ResponseFormat, retrieval: bool) -> ModelCall {
    ModelCall {
        model: MODEL.to_string(),
        system_instruction: "PERSONA\n\nIMPORTANT: RESPOND IN ENGLISH.".to_string(),
        prompt: "[MODULE: ADVISORY CHAT]\nExpert advice required:\n\nharden ssh".to_string(),
        response_format,
        retrieval,
    }
}

fn text_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4}
    })
}

#[tokio::test]
async fn test_request_shape_for_free_form_call_with_search() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint(MODEL)))
        .and(header(API_KEY_HEADER, KEY))
        .and(body_partial_json(json!({
            "systemInstruction": {"parts": [{"text": "PERSONA\n\nIMPORTANT: RESPOND IN ENGLISH."}]},
            "contents": [{"role": "user", "parts": [{"text": "[MODULE: ADVISORY CHAT]\nExpert advice required:\n\nharden ssh"}]}],
            "tools": [{"googleSearch": {}}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body("DISABLE ROOT LOGIN")))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .generate(KEY, &call(ResponseFormat::FreeForm, true))
        .await
        .unwrap();

    assert_eq!(reply.text.as_deref(), Some("DISABLE ROOT LOGIN"));
    assert!(reply.grounding.is_none());

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("generationConfig").is_none());
    assert!(requests[0].url.query().is_none(), "credential must not be in the URL");
}

#[tokio::test]
async fn test_structured_call_sends_schema() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint(MODEL)))
        .and(body_partial_json(json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": structured_result_schema()
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body("{}")))
        .expect(1)
        .mount(&server)
        .await;

    let schema = structured_result_schema();
    client_for(&server)
        .generate(KEY, &call(ResponseFormat::Structured { schema }, false))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("tools").is_none());
}

#[tokio::test]
async fn test_multi_part_text_and_grounding() {
    let server = MockServer::start().await;

    let response = json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": "CVE-2024-3094 "}, {"text": "affects xz."}]},
            "finishReason": "STOP",
            "groundingMetadata": {
                "groundingChunks": [
                    {"web": {"uri": "https://nvd.nist.gov/vuln/detail/CVE-2024-3094", "title": "NVD"}},
                    {"web": {"uri": "https://openwall.com/lists/oss-security"}}
                ]
            }
        }]
    });

    Mock::given(method("POST"))
        .and(path(endpoint(MODEL)))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .generate(KEY, &call(ResponseFormat::FreeForm, true))
        .await
        .unwrap();

    assert_eq!(reply.text.as_deref(), Some("CVE-2024-3094 affects xz."));
    let chunks = reply.grounding.unwrap().chunks;
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].web.as_ref().unwrap().title.as_deref(), Some("NVD"));
    assert!(chunks[1].web.as_ref().unwrap().title.is_none());
}

#[tokio::test]
async fn test_resource_exhausted_is_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint(MODEL)))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "code": 429,
                "message": "You exceeded your current quota.",
                "status": "RESOURCE_EXHAUSTED"
            }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(KEY, &call(ResponseFormat::FreeForm, false))
        .await
        .unwrap_err();

    assert_eq!(err.status, Some(429));
    assert!(err.message.starts_with("RESOURCE_EXHAUSTED"));
    assert_eq!(classify(&err), FailureClass::RateLimited);
}

#[tokio::test]
async fn test_invalid_argument_is_not_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint(MODEL)))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(KEY, &call(ResponseFormat::FreeForm, false))
        .await
        .unwrap_err();

    assert_eq!(err.status, Some(400));
    assert_eq!(
        err.message,
        "INVALID_ARGUMENT: API key not valid. Please pass a valid API key."
    );
    assert_eq!(classify(&err), FailureClass::Other);
}

#[tokio::test]
async fn test_non_json_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint(MODEL)))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream connect error"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(KEY, &call(ResponseFormat::FreeForm, false))
        .await
        .unwrap_err();

    assert_eq!(err.status, Some(503));
    assert!(err.message.contains("upstream connect error"));
}

#[tokio::test]
async fn test_service_falls_back_across_models_over_http() {
    common::setup_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint("primary")))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(endpoint("secondary")))
        .and(header(API_KEY_HEADER, "override-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body("RUNBOOK")))
        .expect(1)
        .mount(&server)
        .await;

    let service = AnalysisService::new(
        Arc::new(client_for(&server)),
        vec!["primary".to_string(), "secondary".to_string()],
        Some("configured-key".to_string()),
    );

    let request = AnalysisRequest::new("ransomware on file server", Module::CrisisSimulator, Language::En)
        .with_credential("override-key");
    let response = service.analyze(request).await.unwrap();

    assert!(matches!(response.result, AnalysisResult::Text(ref t) if t.as_str() == "RUNBOOK"));
    assert!(response.grounding_sources.is_empty());
}

#[tokio::test]
async fn test_service_surfaces_capacity_exceeded_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        })))
        .expect(3)
        .mount(&server)
        .await;

    let service = AnalysisService::new(
        Arc::new(client_for(&server)),
        GeminiConfig::default().model_chain,
        Some("configured-key".to_string()),
    );

    let err = service
        .analyze(AnalysisRequest::new("x", Module::SecureForge, Language::Es))
        .await
        .unwrap_err();
    assert_eq!(err, AnalysisError::CapacityExceeded { attempts: 3 });
}
