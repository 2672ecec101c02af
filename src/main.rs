use anyhow::Result;
use tracing_subscriber::EnvFilter;

use mistakes_server::config::{self, DbConfig};
use mistakes_server::{db, run_server, ServerConfig};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    config::load_dotenv();

    tracing::info!("initializing database connection");
    let db_config = DbConfig::from_env()?;
    let pool = db::connect(&db_config).await?;

    run_server(pool, ServerConfig::default()).await?;
    Ok(())
}
