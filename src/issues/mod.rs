//! Issue resource: model, in-memory store, and CRUD routes.

pub mod handlers;
pub mod model;
pub mod routes;
pub mod store;

pub use model::{CreateIssue, Issue, IssueStatus, UpdateIssue};
pub use store::IssueStore;
