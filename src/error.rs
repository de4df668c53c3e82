//! Unified error types for the issue tracker API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Unified error type for the service shell.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),
}

/// Errors surfaced by the issue routes.
#[derive(Error, Debug)]
pub enum IssueError {
    /// No issue exists with the requested id.
    #[error("issue {0} not found")]
    NotFound(u64),
}

/// JSON body carried by error responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub detail: String,
}

impl IntoResponse for IssueError {
    fn into_response(self) -> Response {
        let status = match self {
            IssueError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T, E = ApiError> = std::result::Result<T, E>;
