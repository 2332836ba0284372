//! # droplink-api
//!
//! HTTP API layer for Droplink built on Axum.
//!
//! Provides the upload, delete, listing, and liveness endpoints, the
//! `AuthUser` extractor, DTOs, CORS, request logging, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
