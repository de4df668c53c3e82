//! HTTP API handlers.

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::issues::IssueStore;

/// Application state shared with handlers.
///
/// Constructed once in `main` and cloned into each handler; all clones
/// share the same underlying store.
#[derive(Debug, Clone)]
pub struct AppState {
    /// In-memory issue store.
    pub issues: Arc<IssueStore>,
}

impl AppState {
    /// Create new app state with an empty store.
    pub fn new() -> Self {
        Self {
            issues: Arc::new(IssueStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Health check handler - always returns 200.
///
/// Deliberately does not consult the store or any dependency; it answers
/// for the process itself.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
