//! Issue CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::api::handlers::AppState;
use crate::error::IssueError;

use super::model::{CreateIssue, IssueStatus, UpdateIssue};

/// Query parameters for listing issues.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListIssuesParams {
    /// Only return issues in this state.
    pub status: Option<IssueStatus>,
}

/// List issues, newest id last.
#[utoipa::path(
    get,
    path = "/api/v1/issues",
    params(ListIssuesParams),
    responses((status = 200, description = "All matching issues", body = [super::model::Issue]))
)]
pub async fn list_issues(
    State(state): State<AppState>,
    Query(params): Query<ListIssuesParams>,
) -> impl IntoResponse {
    Json(state.issues.list(params.status))
}

/// Create an issue.
#[utoipa::path(
    post,
    path = "/api/v1/issues",
    request_body = CreateIssue,
    responses((status = 201, description = "Issue created", body = super::model::Issue))
)]
pub async fn create_issue(
    State(state): State<AppState>,
    Json(create): Json<CreateIssue>,
) -> impl IntoResponse {
    let issue = state.issues.create(create);
    debug!(id = issue.id, "issue created");

    (StatusCode::CREATED, Json(issue))
}

/// Fetch one issue by id.
#[utoipa::path(
    get,
    path = "/api/v1/issues/{id}",
    params(("id" = u64, Path, description = "Issue id")),
    responses(
        (status = 200, description = "The issue", body = super::model::Issue),
        (status = 404, description = "No such issue", body = crate::error::ErrorBody)
    )
)]
pub async fn get_issue(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, IssueError> {
    let issue = state.issues.get(id).ok_or(IssueError::NotFound(id))?;
    Ok(Json(issue))
}

/// Apply a partial update to an issue.
#[utoipa::path(
    put,
    path = "/api/v1/issues/{id}",
    params(("id" = u64, Path, description = "Issue id")),
    request_body = UpdateIssue,
    responses(
        (status = 200, description = "Updated issue", body = super::model::Issue),
        (status = 404, description = "No such issue", body = crate::error::ErrorBody)
    )
)]
pub async fn update_issue(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(update): Json<UpdateIssue>,
) -> Result<impl IntoResponse, IssueError> {
    let issue = state
        .issues
        .update(id, update)
        .ok_or(IssueError::NotFound(id))?;
    debug!(id, "issue updated");

    Ok(Json(issue))
}

/// Delete an issue.
#[utoipa::path(
    delete,
    path = "/api/v1/issues/{id}",
    params(("id" = u64, Path, description = "Issue id")),
    responses(
        (status = 204, description = "Issue deleted"),
        (status = 404, description = "No such issue", body = crate::error::ErrorBody)
    )
)]
pub async fn delete_issue(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, IssueError> {
    if !state.issues.delete(id) {
        return Err(IssueError::NotFound(id));
    }
    debug!(id, "issue deleted");

    Ok(StatusCode::NO_CONTENT)
}
