//! Environment-based configuration
//!
//! Database settings come from `DB_HOST`, `DB_PORT`, `DB_USER`,
//! `DB_PASSWORD`, and `DB_NAME`, optionally loaded from a local `.env`
//! file at startup.

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Database connection settings
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

impl DbConfig {
    /// Read settings from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = require("DB_PORT")?
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid {
                var: "DB_PORT",
                reason: e.to_string(),
            })?;

        Ok(Self {
            host: require("DB_HOST")?,
            port,
            user: require("DB_USER")?,
            password: require("DB_PASSWORD")?,
            dbname: require("DB_NAME")?,
        })
    }

    /// Connection options for sqlx.
    ///
    /// Built field by field rather than as a URL string, so credentials
    /// never need percent-escaping. TLS is required.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
            .ssl_mode(PgSslMode::Require)
    }
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::Missing(var))
}

/// Load `./.env` if present.
///
/// A missing file is normal; any other failure is logged as a warning and
/// startup continues with the process environment as-is.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("loaded environment from {}", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!("failed to load .env file: {}", err),
    }
}
