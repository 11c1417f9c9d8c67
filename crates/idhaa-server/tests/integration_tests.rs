//! Integration tests for the broadcast service

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use idhaa_extractor::{Generator, GeneratorConfig};
use idhaa_gatekeeper::Gatekeeper;
use idhaa_llm::{MockFailure, MockProvider};
use idhaa_server::{
    config::ServerConfig,
    handlers::{create_router, AppState, ErrorResponse, HealthCheckResponse},
};
use std::sync::Arc;
use tower::ServiceExt; // for oneshot

/// Helper to create test application state around a mock provider
fn create_test_state(provider: MockProvider) -> AppState<MockProvider> {
    let generator = Generator::new(
        provider,
        Gatekeeper::default_config(),
        GeneratorConfig::default(),
    );

    AppState {
        generator: Arc::new(generator),
    }
}

fn generate_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/broadcasts/generate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let state = create_test_state(MockProvider::new("{}"));
    let app = create_router(state);

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let health: HealthCheckResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_generate_endpoint_success() {
    // The model wraps its JSON in prose and a fence; the pipeline still
    // extracts the embedded document
    let state = create_test_state(MockProvider::new(
        "Here is the content:\n```json\n{\"introduction\": {\"primary\":\"a\",\"middle\":\"b\",\"secondary\":\"c\"}, \"quranVerses\": [{\"text\":\"x\",\"reference\":\"y\"}], \"hadiths\": []}\n```\nThanks!",
    ));
    let app = create_router(state);

    let response = app
        .oneshot(generate_request(r#"{"title": "النظافة"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let content = &payload["content"];
    assert_eq!(content["introduction"]["primary"], "a");
    assert_eq!(content["quranVerses"][0]["text"], "x");
    assert_eq!(content["quranVerses"][0]["reference"], "y");
    // Present-but-empty hadiths list survives validation
    assert_eq!(content["hadiths"], serde_json::json!([]));
}

#[tokio::test]
async fn test_generate_endpoint_full_request() {
    let state = create_test_state(MockProvider::new(
        r#"{"introduction": {"primary":"a","middle":"b","secondary":"c"}, "quranVerses": [], "hadiths": [], "conclusion": "الخاتمة"}"#,
    ));
    let app = create_router(state);

    let body = r#"{
        "title": "آداب الحوار",
        "categories": ["أخلاق"],
        "style": "engaging",
        "length": "short",
        "sections": {"questions": false}
    }"#;

    let response = app.oneshot(generate_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload["content"]["conclusion"], "الخاتمة");
}

#[tokio::test]
async fn test_generate_endpoint_malformed_completion() {
    let state = create_test_state(MockProvider::new("Sorry, I cannot produce that."));
    let app = create_router(state);

    let response = app
        .oneshot(generate_request(r#"{"title": "النظافة"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert!(!error.error.is_empty());
}

#[tokio::test]
async fn test_generate_endpoint_missing_sections() {
    // Valid JSON, but no hadiths key; the gatekeeper rejects it
    let state = create_test_state(MockProvider::new(
        r#"{"introduction": {"primary": "a"}, "quranVerses": []}"#,
    ));
    let app = create_router(state);

    let response = app
        .oneshot(generate_request(r#"{"title": "النظافة"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert!(!error.error.is_empty());
}

#[tokio::test]
async fn test_generate_endpoint_rate_limited() {
    let state = create_test_state(MockProvider::failing(MockFailure::RateLimited));
    let app = create_router(state);

    let response = app
        .oneshot(generate_request(r#"{"title": "النظافة"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_generate_endpoint_billing_required() {
    let state = create_test_state(MockProvider::failing(MockFailure::BillingRequired));
    let app = create_router(state);

    let response = app
        .oneshot(generate_request(r#"{"title": "النظافة"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
}

#[tokio::test]
async fn test_generate_endpoint_communication_failure_is_500() {
    let state = create_test_state(MockProvider::failing(MockFailure::Communication));
    let app = create_router(state);

    let response = app
        .oneshot(generate_request(r#"{"title": "النظافة"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_generate_endpoint_empty_title() {
    let state = create_test_state(MockProvider::new("{}"));
    let app = create_router(state);

    let response = app
        .oneshot(generate_request(r#"{"title": "  "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_server_config_from_toml() {
    let toml = r#"
        bind_address = "0.0.0.0"
        bind_port = 9000

        [gateway]
        endpoint = "https://gateway.example.com"
        model = "radio-script-v1"
        api_key = "secret"
    "#;

    let config: ServerConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.bind_address, "0.0.0.0");
    assert_eq!(config.bind_port, 9000);
    assert_eq!(config.gateway.model, "radio-script-v1");
    assert_eq!(config.generator.completion_timeout_secs, 120); // Default
}
