//! Mini production-style issue tracker API.
//!
//! A small HTTP service: one health endpoint, permissive CORS, a
//! request-timing middleware, and an in-memory issues router, all wired
//! into a single immutable [`axum::Router`] at startup.
//!
//! # Request path
//!
//! ```text
//! request ──▶ timing middleware ──▶ CORS ──▶ trace ──▶ route dispatch
//!                                                      ├── GET /api/v1/health
//!                                                      ├── /api/v1/issues/...
//!                                                      └── GET /api/v1/openapi.json
//! ```
//!
//! Every response carries an `x-process-time` header with the elapsed
//! handler time in decimal seconds, timed independently per request.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Router composition, health endpoint, middleware
//! - [`issues`]: Issue model, store, and CRUD routes
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod issues;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result};
