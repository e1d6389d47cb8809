//! Integration tests for the HTTP server.
//!
//! Requests are driven through the router with `oneshot`; no socket is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use card_dealer::{DealError, DealResult, Dealer, DealerConfig};
use dealer_server::api::{AppState, create_router, request_id::REQUEST_ID_HEADER};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::collections::HashSet;
use rand::rngs::StdRng;
use std::sync::Arc;
use tower::ServiceExt; // For `oneshot` method

/// Helper to create a test router
fn create_test_server(config: DealerConfig) -> axum::Router {
    let state = AppState {
        dealer: Arc::new(Dealer::new(config)),
    };
    create_router(state)
}

/// Server whose dealer cannot seed its shuffle.
fn entropy_failing_server() -> axum::Router {
    let dealer = Dealer::with_rng_factory(
        DealerConfig::default(),
        Arc::new(|| -> DealResult<StdRng> {
            Err(DealError::Entropy("os rng unavailable".to_string()))
        }),
    );
    create_router(AppState {
        dealer: Arc::new(dealer),
    })
}

fn form_request(content_type: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/distribute");
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn seeded_server() -> axum::Router {
    create_test_server(DealerConfig {
        seed: Some(42),
        ..Default::default()
    })
}

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/cards/distribute")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn send_json(app: axum::Router, body: &str) -> (StatusCode, Value) {
    let (status, bytes) = send(app, json_request(body)).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn assert_invalid_input(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        &json!({
            "success": false,
            "status": 400,
            "message": "Please enter a valid input."
        })
    );
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = create_test_server(DealerConfig::default());

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, bytes) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["shuffle"], "entropy");
    assert_eq!(body["max_players"], 10_000);
}

// ============================================================================
// JSON Distribution Tests
// ============================================================================

#[tokio::test]
async fn test_distribute_four_people() {
    let (status, body) = send_json(seeded_server(), r#"{"numberOfPeople": 4}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["numberOfPeople"], 4);

    let hands = body["distributedCards"].as_array().unwrap();
    assert_eq!(hands.len(), 4);

    let mut seen = HashSet::new();
    for hand in hands {
        let tokens: Vec<&str> = hand.as_str().unwrap().split(',').collect();
        assert_eq!(tokens.len(), 13);
        for token in tokens {
            assert!(seen.insert(token.to_string()), "{token} dealt twice");
        }
    }
    assert_eq!(seen.len(), 52);
}

#[tokio::test]
async fn test_distribute_accepts_numeric_string() {
    let (status, body) = send_json(seeded_server(), r#"{"numberOfPeople": " 3 "}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["numberOfPeople"], 3);
    assert_eq!(body["distributedCards"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_distribute_more_people_than_cards() {
    let (status, body) = send_json(seeded_server(), r#"{"numberOfPeople": 60}"#).await;

    assert_eq!(status, StatusCode::OK);
    let hands = body["distributedCards"].as_array().unwrap();
    assert_eq!(hands.len(), 60);
    assert_eq!(hands.iter().filter(|h| h.as_str() == Some("")).count(), 8);
}

#[tokio::test]
async fn test_seeded_server_is_deterministic() {
    let (_, first) = send_json(seeded_server(), r#"{"numberOfPeople": 5}"#).await;
    let (_, second) = send_json(seeded_server(), r#"{"numberOfPeople": 5}"#).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_distribute_rejects_invalid_counts() {
    let bodies = [
        r#"{"numberOfPeople": 0}"#,
        r#"{"numberOfPeople": -4}"#,
        r#"{"numberOfPeople": "abc"}"#,
        r#"{"numberOfPeople": 2.5}"#,
        r#"{"numberOfPeople": null}"#,
        r#"{}"#,
    ];
    for body in bodies {
        let (status, response) = send_json(seeded_server(), body).await;
        assert_invalid_input(status, &response);
    }
}

#[tokio::test]
async fn test_distribute_rejects_malformed_json() {
    let (status, body) = send_json(seeded_server(), "{numberOfPeople").await;
    assert_invalid_input(status, &body);
}

#[tokio::test]
async fn test_distribute_rejects_above_cap() {
    let app = create_test_server(DealerConfig {
        max_players: 10,
        seed: None,
    });
    let (status, body) = send_json(app, r#"{"numberOfPeople": 11}"#).await;
    assert_invalid_input(status, &body);
}

#[tokio::test]
async fn test_distribute_reports_entropy_failure() {
    let (status, body) = send_json(entropy_failing_server(), r#"{"numberOfPeople": 4}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "success": false,
            "status": 500,
            "message": "An error occurred. Please try again."
        })
    );
    assert!(body.get("distributedCards").is_none());
}

#[tokio::test]
async fn test_distribute_validates_before_seeding() {
    let (status, body) = send_json(entropy_failing_server(), r#"{"numberOfPeople": 0}"#).await;
    assert_invalid_input(status, &body);
}

#[tokio::test]
async fn test_health_check_reports_entropy_failure() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, bytes) = send(entropy_failing_server(), request).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "unhealthy");
}

// ============================================================================
// HTML Page Tests
// ============================================================================

#[tokio::test]
async fn test_index_page() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let (status, bytes) = send(seeded_server(), request).await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(bytes).unwrap();
    assert!(html.contains("Number of People"));
    assert!(html.contains("action=\"/distribute\""));
}

#[tokio::test]
async fn test_form_distribution_renders_hands() {
    let request = Request::builder()
        .method("POST")
        .uri("/distribute")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("numberOfPeople=4"))
        .unwrap();

    let (status, bytes) = send(seeded_server(), request).await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(bytes).unwrap();
    assert!(html.contains("Cards Distributed to 4 People"));
    for person in 1..=4 {
        assert!(html.contains(&format!("Person {person} (13 cards)")));
    }
    assert_eq!(html.matches("class=\"card\"").count(), 52);
}

#[tokio::test]
async fn test_form_distribution_rejects_zero() {
    let request = Request::builder()
        .method("POST")
        .uri("/distribute")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("numberOfPeople=0"))
        .unwrap();

    let (status, bytes) = send(seeded_server(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let html = String::from_utf8(bytes).unwrap();
    assert!(html.contains("Please enter a valid input."));
    assert!(!html.contains("Person 1"));
}

#[tokio::test]
async fn test_form_distribution_rejects_missing_content_type() {
    let request = form_request(None, "numberOfPeople=4");

    let (status, bytes) = send(seeded_server(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let html = String::from_utf8(bytes).unwrap();
    assert!(html.contains("Please enter a valid input."));
    assert!(!html.contains("Person 1"));
}

#[tokio::test]
async fn test_form_distribution_rejects_duplicate_field() {
    let request = form_request(
        Some("application/x-www-form-urlencoded"),
        "numberOfPeople=4&numberOfPeople=5",
    );

    let (status, bytes) = send(seeded_server(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let html = String::from_utf8(bytes).unwrap();
    assert!(html.contains("Please enter a valid input."));
}

#[tokio::test]
async fn test_form_distribution_reports_entropy_failure() {
    let request = form_request(Some("application/x-www-form-urlencoded"), "numberOfPeople=4");

    let (status, bytes) = send(entropy_failing_server(), request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let html = String::from_utf8(bytes).unwrap();
    assert!(html.contains("An error occurred. Please try again."));
    assert!(!html.contains("Person 1"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let request = Request::builder()
        .uri("/cards")
        .body(Body::empty())
        .unwrap();

    let response = seeded_server().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}

// ============================================================================
// Request ID Tests
// ============================================================================

#[tokio::test]
async fn test_request_id_is_echoed() {
    let mut request = json_request(r#"{"numberOfPeople": 2}"#);
    request
        .headers_mut()
        .insert(REQUEST_ID_HEADER, "trace-abc".parse().unwrap());

    let response = seeded_server().oneshot(request).await.unwrap();
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "trace-abc");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let response = seeded_server()
        .oneshot(json_request(r#"{"numberOfPeople": 2}"#))
        .await
        .unwrap();
    let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert_eq!(id.len(), 36);
}
