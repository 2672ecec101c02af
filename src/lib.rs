//! mistakes-server: HTTP backend for a single `mistakes` table
//!
//! Thin service wiring:
//! - Environment configuration (with optional `.env` loading)
//! - Bounded PostgreSQL connection pool with startup retry
//! - Idempotent table bootstrap
//! - Two JSON endpoints (list all, create one) plus two static text routes
//! - Permissive CORS and graceful shutdown

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use http::server::{build_router, run_server, ServerConfig};
pub use state::AppState;
