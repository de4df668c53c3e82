//! HTTP API route definitions and middleware wiring.

use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::issues;

use super::docs::ApiDoc;
use super::handlers::{health, AppState};
use super::middleware::{cors_layer, record_process_time};

/// Create the application router.
///
/// Built once at startup; the route table and middleware chain never
/// change afterwards. The timing layer is outermost so every response,
/// including CORS preflights, carries the timing header.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/api/v1/health", get(health))
        // OpenAPI document
        .route("/api/v1/openapi.json", get(openapi))
        // Issue routes
        .merge(issues::routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(axum::middleware::from_fn(record_process_time))
        .with_state(state)
}

/// Serve the generated OpenAPI document.
async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
