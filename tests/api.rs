//! Integration tests exercising the composed application router.

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use issue_tracker::api::middleware::PROCESS_TIME_HEADER;
use issue_tracker::api::{create_router, AppState};
use issue_tracker::error::ErrorBody;

fn app() -> axum::Router {
    create_router(AppState::new())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn process_time(response: &Response<axum::body::Body>) -> f64 {
    response
        .headers()
        .get(PROCESS_TIME_HEADER)
        .expect("every response must carry the timing header")
        .to_str()
        .unwrap()
        .parse()
        .expect("timing header must be a decimal number")
}

#[tokio::test]
async fn health_returns_exact_ok_body_with_timing_header() {
    let response = app().oneshot(get("/api/v1/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(process_time(&response) >= 0.0);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], br#"{"status":"ok"}"#);
}

#[tokio::test]
async fn health_ignores_query_parameters_and_headers() {
    let request = Request::builder()
        .uri("/api/v1/health?probe=true")
        .header("x-anything", "at-all")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn every_route_carries_the_timing_header() {
    let app = app();

    for uri in ["/api/v1/health", "/api/v1/issues", "/api/v1/openapi.json"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert!(
            process_time(&response) >= 0.0,
            "missing or negative timing for {uri}"
        );
    }

    // Error responses are timed too.
    let response = app.oneshot(get("/api/v1/issues/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(process_time(&response) >= 0.0);
}

#[tokio::test]
async fn cors_headers_apply_to_ordinary_responses() {
    let request = Request::builder()
        .uri("/api/v1/health")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    let headers = response.headers();

    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://example.com")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
async fn preflight_mirrors_requested_method() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/issues")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    let headers = response.headers();

    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://example.com")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .and_then(|v| v.to_str().ok()),
        Some("DELETE")
    );
    assert!(process_time(&response) >= 0.0);
}

#[tokio::test]
async fn issue_lifecycle_create_read_update_delete() {
    let app = app();

    // Create
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/issues",
            r#"{"title":"flaky timer test","description":"only fails on CI"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["status"], "open");

    // Read back
    let response = app.clone().oneshot(get("/api/v1/issues/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["title"], "flaky timer test");

    // Update
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/v1/issues/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"status":"closed"}"#))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["status"], "closed");
    assert_eq!(updated["title"], "flaky timer test");

    // Delete
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/v1/issues/1")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone
    let response = app.oneshot(get("/api/v1/issues/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(body.detail, "issue 1 not found");
}
