//! OpenAPI document for the API surface.

use utoipa::OpenApi;

/// Generated OpenAPI description, served at /api/v1/openapi.json.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Issue Tracker API",
        description = "A mini production-style API built with axum"
    ),
    paths(
        crate::api::handlers::health,
        crate::issues::handlers::list_issues,
        crate::issues::handlers::create_issue,
        crate::issues::handlers::get_issue,
        crate::issues::handlers::update_issue,
        crate::issues::handlers::delete_issue,
    ),
    components(schemas(
        crate::api::handlers::HealthResponse,
        crate::error::ErrorBody,
        crate::issues::model::Issue,
        crate::issues::model::IssueStatus,
        crate::issues::model::CreateIssue,
        crate::issues::model::UpdateIssue,
    ))
)]
pub struct ApiDoc;
