use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use rental_home::config;
use rental_home::db::{self, SqliteStore};
use rental_home::web::{self, AppState};

#[derive(Debug, Parser)]
#[command(author, version, about = "Serve the rental listings homepage")]
struct Args {
    /// Path to YAML config file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Listen address; overrides `server.bind`
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let cfg = config::load(Some(&args.config))?;
    cfg.ensure_dirs()?;

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| cfg.database_url());
    let pool = db::init_pool(&database_url).await?;
    db::run_migrations(&pool).await?;

    let state = AppState::new(Arc::new(SqliteStore::new(pool)), &cfg);
    let app = web::router(state);

    let bind = args.bind.unwrap_or_else(|| cfg.server.bind.clone());
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    info!(%bind, "serving homepage");
    axum::serve(listener, app).await?;

    Ok(())
}
