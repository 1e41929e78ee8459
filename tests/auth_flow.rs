//! Authentication filter chain integration tests.
//!
//! Drives the full router (filters + authorization + handlers) through
//! `tower::ServiceExt::oneshot`, one request per call, no running server.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tower::ServiceExt;

use orders_api::{app, config::Config};

fn test_app() -> Router {
    let config = Config::from_env().expect("config");
    app::build_router(app::build_state(), &config)
}

fn basic(user: &str, pass: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{pass}")))
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Grab an existing order id through the public list endpoint.
async fn sample_order_id(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/orders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let orders = json_body(response).await;
    orders[0]["id"].as_str().expect("order id").to_string()
}

#[tokio::test]
async fn delete_with_api_key_header_pair() {
    let app = test_app();
    let id = sample_order_id(&app).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/orders/{id}"))
                .header("Api-Key", "spring")
                .header("Api-Secret", "spring")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn delete_with_wrong_api_secret_is_unauthorized() {
    let app = test_app();
    let id = sample_order_id(&app).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/orders/{id}"))
                .header("Api-Key", "spring")
                .header("Api-Secret", "wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // 401 must not leak which credential field was wrong
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn delete_with_http_basic() {
    let app = test_app();
    let id = sample_order_id(&app).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/orders/{id}"))
                .header("Authorization", basic("spring", "spring"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
}

#[tokio::test]
async fn delete_with_no_credentials_is_unauthorized() {
    let app = test_app();
    let id = sample_order_id(&app).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/orders/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn delete_with_query_param_pair() {
    let app = test_app();
    let id = sample_order_id(&app).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!(
                    "/api/v1/orders/{id}?api_key=spring&api_secret=spring"
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_basic_header_is_401_not_500() {
    let app = test_app();
    let id = sample_order_id(&app).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/orders/{id}"))
                .header("Authorization", "Basic %%%not-base64%%%")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_basic_user_is_unauthorized() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/whoami")
                .header("Authorization", basic("nobody", "nothing"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bad_credentials_on_public_path_do_not_block_the_request() {
    // Public paths skip authentication entirely, so a stale or wrong
    // Api-Key header must not turn a public GET into a 401.
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/orders")
                .header("Api-Key", "spring")
                .header("Api-Secret", "wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn identity_does_not_leak_into_the_next_request() {
    let app = test_app();

    // Request A: authenticated
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/whoami")
                .header("Authorization", basic("spring", "spring"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Request B: no credentials, immediately after. Must NOT inherit A's identity.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/whoami")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn same_credentials_yield_the_same_identity_across_requests() {
    let app = test_app();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/whoami")
                    .header("Api-Key", "spring")
                    .header("Api-Secret", "spring")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let identity = json_body(response).await;
        assert_eq!(identity["principal"], "spring");
        assert_eq!(identity["roles"], serde_json::json!(["ADMIN"]));
    }
}
