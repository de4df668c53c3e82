//! Issue data model.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Lifecycle state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    /// Newly filed, nobody working on it.
    Open,
    /// Somebody picked it up.
    InProgress,
    /// Resolved or discarded.
    Closed,
}

/// A tracked issue.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Issue {
    /// Unique identifier, assigned by the store.
    pub id: u64,
    /// Short summary.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Current lifecycle state.
    pub status: IssueStatus,
    /// When the issue was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the issue was last modified.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Request body for creating an issue.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateIssue {
    /// Short summary.
    pub title: String,
    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Initial state; defaults to open.
    #[serde(default = "default_status")]
    pub status: IssueStatus,
}

fn default_status() -> IssueStatus {
    IssueStatus::Open
}

/// Request body for updating an issue. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateIssue {
    /// New title, if changing.
    #[serde(default)]
    pub title: Option<String>,
    /// New description, if changing.
    #[serde(default)]
    pub description: Option<String>,
    /// New status, if changing.
    #[serde(default)]
    pub status: Option<IssueStatus>,
}
