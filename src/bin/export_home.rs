use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use rental_home::config::{self, Config};
use rental_home::db::{self, SqliteStore};
use rental_home::home::{self, HomeSettings};
use rental_home::render;

#[derive(Debug, Parser)]
#[command(about = "Render the homepage once and write it to {data_dir}/html/index.html")]
struct Args {
    /// Path to YAML config file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Output file; defaults to {data_dir}/html/index.html
    #[arg(long)]
    out: Option<PathBuf>,
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
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(cfg.app.resolved_data_dir()).join("html").join("index.html"));
    run(&cfg, &out).await?;

    println!("Wrote {}", absolute_path(&out).display());
    Ok(())
}

async fn run(cfg: &Config, out: &Path) -> Result<()> {
    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| cfg.database_url());
    let pool = db::init_pool(&database_url).await?;
    db::run_migrations(&pool).await?;

    let store = SqliteStore::new(pool);
    let data = home::load_home(&store, &HomeSettings::from(cfg)).await?;
    let html = render::render_home_page(&cfg.site, &data);

    if let Some(parent) = out.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(out, html)
        .await
        .with_context(|| format!("failed to write {}", out.display()))?;
    Ok(())
}

fn absolute_path(p: &Path) -> PathBuf {
    if p.is_absolute() {
        return p.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(p),
        Err(_) => p.to_path_buf(),
    }
}
