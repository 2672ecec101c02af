//! Schema bootstrap for the `mistakes` table

use sqlx::PgPool;

use crate::db::repos::DbError;

/// Create the `mistakes` table if it does not exist.
///
/// Idempotent; this is the only DDL the service ever runs.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS mistakes (
            id SERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            description TEXT NOT NULL,
            category VARCHAR(100)
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("mistakes table checked/created");
    Ok(())
}
