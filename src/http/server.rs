//! Axum server setup
//!
//! Router assembly, CORS, timeouts, and graceful shutdown on
//! SIGINT/SIGTERM with a bounded drain window.

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{header, Method};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::state::AppState;

/// Server configuration
///
/// Only the per-request timeout is configurable; idle keep-alive
/// connection lifecycle is left to the HTTP stack, since `axum::serve`
/// exposes no idle-timeout knob.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// Per-request handler timeout
    pub request_timeout: Duration,

    /// How long in-flight requests may drain at shutdown
    pub shutdown_grace: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            request_timeout: Duration::from_secs(10),
            shutdown_grace: Duration::from_secs(5),
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the application router with CORS, timeout, and tracing layers.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    // All origins with credentials allowed: tower-http rejects the `Any`
    // wildcard in that combination, so the request origin is reflected.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .merge(routes::meta::router())
        .merge(routes::mistakes::router())
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until a termination signal arrives.
///
/// On SIGINT/SIGTERM the listener stops accepting new connections,
/// in-flight requests get `shutdown_grace` to finish, then the pool is
/// closed regardless.
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState::new(pool.clone());
    let app = build_router(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("server listening on {}", config.bind_addr);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let mut server = std::pin::pin!(axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        })
        .into_future());

    tokio::select! {
        result = &mut server => result?,
        _ = shutdown_signal() => {
            tracing::info!("draining in-flight requests");
            let _ = shutdown_tx.send(());
            match tokio::time::timeout(config.shutdown_grace, &mut server).await {
                Ok(result) => result?,
                Err(_) => tracing::warn!(
                    "grace period of {:?} elapsed, abandoning in-flight requests",
                    config.shutdown_grace
                ),
            }
        }
    }

    pool.close().await;
    tracing::info!("server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, starting shutdown");
        }
    }
}
