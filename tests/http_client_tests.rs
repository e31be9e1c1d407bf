//! Integration tests for the request pipeline and error classification.
//!
//! These tests drive real HTTP exchanges against wiremock and check how
//! statuses, bodies, timeouts, transport failures and cancellation surface
//! to the caller.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use shopsavvy_data_api::clients::{
    ApiErrorKind, AUTHENTICATION_MESSAGE, DESERIALIZE_MESSAGE, NOT_FOUND_MESSAGE,
    RATE_LIMIT_MESSAGE, VALIDATION_MESSAGE,
};
use shopsavvy_data_api::models::UsageInfo;
use shopsavvy_data_api::{
    ApiError, ApiKey, BaseUrl, DataApiClient, HttpClient, HttpMethod, HttpRequest,
    ShopSavvyConfig,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(base_url: &str, timeout_ms: u64) -> ShopSavvyConfig {
    ShopSavvyConfig::builder()
        .api_key(ApiKey::new("ss_test_abc123").unwrap())
        .base_url(BaseUrl::new(base_url).unwrap())
        .timeout_ms(timeout_ms)
        .build()
        .unwrap()
}

fn create_client(server: &MockServer) -> DataApiClient {
    DataApiClient::new(config_for(&server.uri(), 5_000)).unwrap()
}

async fn mount_details(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/products/details"))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Status Classification
// ============================================================================

#[tokio::test]
async fn test_401_maps_to_authentication_error() {
    let server = MockServer::start().await;
    mount_details(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({"error": "invalid key"})),
    )
    .await;

    let error = create_client(&server)
        .get_product_details("p1", None)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ApiErrorKind::Authentication);
    assert_eq!(error.to_string(), AUTHENTICATION_MESSAGE);
}

#[tokio::test]
async fn test_404_maps_to_not_found_error() {
    let server = MockServer::start().await;
    mount_details(&server, ResponseTemplate::new(404)).await;

    let error = create_client(&server)
        .get_product_details("missing", None)
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::NotFound { ref message } if message == NOT_FOUND_MESSAGE));
}

#[tokio::test]
async fn test_422_maps_to_validation_error() {
    let server = MockServer::start().await;
    mount_details(
        &server,
        ResponseTemplate::new(422).set_body_json(json!({"error": "identifier required"})),
    )
    .await;

    let error = create_client(&server)
        .get_product_details("", None)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ApiErrorKind::Validation);
    assert_eq!(error.to_string(), VALIDATION_MESSAGE);
}

#[tokio::test]
async fn test_429_maps_to_rate_limit_and_ignores_body() {
    let server = MockServer::start().await;
    mount_details(
        &server,
        ResponseTemplate::new(429).set_body_json(json!({"error": "quota bucket 42 drained"})),
    )
    .await;

    let error = create_client(&server)
        .get_product_details("p1", None)
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::RateLimit { .. }));
    assert_eq!(error.to_string(), RATE_LIMIT_MESSAGE);
    assert!(!error.to_string().contains("quota bucket"));
}

#[tokio::test]
async fn test_500_with_json_error_field() {
    let server = MockServer::start().await;
    mount_details(
        &server,
        ResponseTemplate::new(500).set_body_string(r#"{"error":"boom"}"#),
    )
    .await;

    let error = create_client(&server)
        .get_product_details("p1", None)
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Api { status: Some(500), .. }));
    assert_eq!(error.to_string(), "HTTP 500: boom");
}

#[tokio::test]
async fn test_500_with_plain_text_body() {
    let server = MockServer::start().await;
    mount_details(&server, ResponseTemplate::new(500).set_body_string("not json")).await;

    let error = create_client(&server)
        .get_product_details("p1", None)
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "HTTP 500: not json");
    assert_eq!(error.status(), Some(500));
}

#[tokio::test]
async fn test_failed_call_is_made_exactly_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/usage"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let error = create_client(&server).get_usage().await.unwrap_err();
    assert_eq!(error.to_string(), "HTTP 503: unavailable");
    // `expect(1)` is verified when the server drops
}

// ============================================================================
// Response Decoding
// ============================================================================

#[tokio::test]
async fn test_undecodable_success_body_is_api_error() {
    let server = MockServer::start().await;
    mount_details(&server, ResponseTemplate::new(200).set_body_string("not json")).await;

    let error = create_client(&server)
        .get_product_details("p1", None)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ApiErrorKind::Api);
    assert_eq!(error.to_string(), DESERIALIZE_MESSAGE);
}

#[tokio::test]
async fn test_missing_required_field_is_api_error() {
    let server = MockServer::start().await;
    mount_details(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"product_id": "p1"}
        })),
    )
    .await;

    let error = create_client(&server)
        .get_product_details("p1", None)
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Api { status: Some(200), .. }));
}

#[tokio::test]
async fn test_null_success_body_is_api_error() {
    let server = MockServer::start().await;
    mount_details(&server, ResponseTemplate::new(200).set_body_string("null")).await;

    let error = create_client(&server)
        .get_product_details("p1", None)
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), DESERIALIZE_MESSAGE);
}

// ============================================================================
// Transport Failures
// ============================================================================

#[tokio::test]
async fn test_slow_response_maps_to_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/details"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": {"product_id": "p1", "name": "Widget"}}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = DataApiClient::new(config_for(&server.uri(), 200)).unwrap();
    let error = client.get_product_details("p1", None).await.unwrap_err();

    assert!(matches!(error, ApiError::Timeout { timeout_ms: 200 }));
    assert!(error.to_string().contains("200ms"));
}

#[tokio::test]
async fn test_connection_refused_maps_to_network_error() {
    // Port 1 is reserved and nothing listens on it
    let client = DataApiClient::new(config_for("http://127.0.0.1:1", 5_000)).unwrap();

    let error = client.get_usage().await.unwrap_err();

    assert_eq!(error.kind(), ApiErrorKind::Network);
    assert_eq!(error.status(), None);
    assert_eq!(error.to_string(), "Network error");

    let source = std::error::Error::source(&error).unwrap().to_string();
    assert!(!source.is_empty());
    assert!(!error.to_string().contains(&source));
}

#[tokio::test]
async fn test_caller_cancellation_is_distinct_from_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/usage"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let client = HttpClient::new(config_for(&server.uri(), 10_000)).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "/usage").build();

    let result = client
        .execute_with_cancel::<UsageInfo, _>(request, tokio::time::sleep(Duration::from_millis(50)))
        .await;

    assert!(matches!(result, Err(ApiError::Cancelled)));
}

#[tokio::test]
async fn test_typed_operation_can_be_cancelled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/offers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = DataApiClient::new(config_for(&server.uri(), 10_000)).unwrap();

    let error = DataApiClient::with_cancel(
        client.get_current_offers("p1", None, None),
        tokio::time::sleep(Duration::from_millis(50)),
    )
    .await
    .unwrap_err();

    assert_eq!(error.kind(), ApiErrorKind::Cancelled);
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn test_typed_operation_with_idle_cancel_completes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/scheduled"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = DataApiClient::new(config_for(&server.uri(), 10_000)).unwrap();

    let response = DataApiClient::with_cancel(
        client.get_scheduled_products(),
        std::future::pending(),
    )
    .await
    .unwrap();

    assert!(response.data.is_empty());
}

#[tokio::test]
async fn test_cancel_does_not_mask_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/usage"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = DataApiClient::new(config_for(&server.uri(), 10_000)).unwrap();

    let error = DataApiClient::with_cancel(client.get_usage(), std::future::pending())
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ApiErrorKind::Authentication);
}

#[tokio::test]
async fn test_uncancelled_call_completes_normally() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/scheduled"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": []})))
        .mount(&server)
        .await;

    let client = HttpClient::new(config_for(&server.uri(), 10_000)).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "/products/scheduled").build();

    let response = client
        .execute_with_cancel::<Vec<serde_json::Value>, _>(request, std::future::pending())
        .await
        .unwrap();

    assert!(response.success);
    assert!(response.data.is_empty());
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_timeout_on_one_call_does_not_affect_another() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/details"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/usage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"current_period": {
                "start_date": "2024-03-01",
                "end_date": "2024-03-31",
                "credits_used": 1,
                "credits_limit": 100,
                "credits_remaining": 99
            }}
        })))
        .mount(&server)
        .await;

    let client = Arc::new(DataApiClient::new(config_for(&server.uri(), 500)).unwrap());

    let slow = {
        let client = Arc::clone(&client);
        tokio::spawn(async move { client.get_product_details("p1", None).await })
    };
    let fast = {
        let client = Arc::clone(&client);
        tokio::spawn(async move { client.get_usage().await })
    };

    let (slow, fast) = tokio::join!(slow, fast);

    assert!(matches!(slow.unwrap(), Err(ApiError::Timeout { timeout_ms: 500 })));
    assert_eq!(fast.unwrap().unwrap().data.current_period.credits_remaining, 99);
}
