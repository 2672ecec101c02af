//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Startup reachability
//! is verified with a `SELECT 1` probe under a bounded fixed-delay retry
//! policy; the schema is bootstrapped once the probe succeeds.

use std::future::Future;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DbConfig;
use crate::db::migrations;
use crate::db::repos::DbError;

/// Maximum concurrent (and idle) connections in the pool.
const MAX_CONNECTIONS: u32 = 25;

/// Connections are recycled after this much age.
const CONN_MAX_LIFETIME: Duration = Duration::from_secs(5 * 60);

/// Bounded fixed-delay retry policy.
///
/// Delays go through `tokio::time::sleep`, so tests under a paused clock
/// run without real waiting.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Run `op` until it succeeds or `max_attempts` is exhausted, sleeping
    /// `delay` between attempts. The last error is returned as-is.
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let mut attempt = 1u32;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.max_attempts => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %err,
                        "attempt failed, retrying in {:?}",
                        self.delay
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Open the connection pool with the default retry policy.
pub async fn connect(config: &DbConfig) -> Result<PgPool, DbError> {
    connect_with_policy(config, RetryPolicy::default()).await
}

/// Open the connection pool, probe reachability under `retry`, and ensure
/// the `mistakes` table exists.
///
/// # Errors
///
/// Returns an error once every probe attempt has failed, or if the table
/// bootstrap fails. Callers must treat either as fatal to startup.
pub async fn connect_with_policy(
    config: &DbConfig,
    retry: RetryPolicy,
) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .max_lifetime(CONN_MAX_LIFETIME)
        .connect_lazy_with(config.connect_options());

    // Liveness probe drives the first real connection attempt.
    retry
        .run(|| {
            let pool = pool.clone();
            async move { sqlx::query("SELECT 1").execute(&pool).await.map(drop) }
        })
        .await?;

    tracing::info!(host = %config.host, db = %config.dbname, "database connection established");

    migrations::ensure_schema(&pool).await?;
    Ok(pool)
}
