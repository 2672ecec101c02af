//! HTTP layer
//!
//! Axum server with:
//! - Permissive CORS (origin reflected, credentials allowed)
//! - Request tracing and a per-request timeout
//! - Graceful shutdown with a bounded drain window
//! - JSON error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig};
