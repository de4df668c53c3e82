//! Issue route definitions, mounted under /api/v1/issues.

use axum::routing::get;
use axum::Router;

use crate::api::handlers::AppState;

use super::handlers::{create_issue, delete_issue, get_issue, list_issues, update_issue};

/// Create the issues sub-router. Paths are absolute so the router can be
/// merged into the application router unchanged.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/issues", get(list_issues).post(create_issue))
        .route(
            "/api/v1/issues/:id",
            get(get_issue).put(update_issue).delete(delete_issue),
        )
}
