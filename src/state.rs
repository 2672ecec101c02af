//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
///
/// Constructed once at startup with a live pool; handlers cannot exist
/// without it, so there is no "pool not initialized" state to guard.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool }),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }
}
