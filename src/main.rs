//! Wiring & DI. Entry point: load config, bootstrap the store, inject into the service, run the menu.
//! No business logic here.

use projects::adapters::persistence::{JsonRepo, MemoryRepo, SqliteRepo};
use projects::adapters::ui::{CommandLoop, Console, banner};
use projects::ports::{InputPort, ProjectRepo};
use projects::shared::config::{AppConfig, StorageKind};
use projects::usecases::ProjectService;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv::dotenv();
    let cfg = AppConfig::load().unwrap_or_default();

    // Logs go to stderr; stdout carries only the menu dialogue.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cfg.log_level_or_default())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let storage = cfg.storage_kind().map_err(anyhow::Error::msg)?;
    let data_path = PathBuf::from(cfg.data_dir_or_default());
    info!(%storage, path = %data_path.display(), "project store");

    let repo: Arc<dyn ProjectRepo> = match storage {
        StorageKind::Sqlite => Arc::new(
            SqliteRepo::connect(&data_path)
                .await
                .map_err(|e| anyhow::anyhow!("SQLite connect failed: {}", e))?,
        ),
        StorageKind::Json => {
            let repo = JsonRepo::new(&data_path);
            repo.load().await.map_err(|e| anyhow::anyhow!("{}", e))?;
            Arc::new(repo)
        }
        StorageKind::Memory => Arc::new(MemoryRepo::new()),
    };

    if cfg.banner_enabled() {
        banner::print_welcome(&mut std::io::stdout())?;
    }

    let service = Arc::new(ProjectService::new(repo));
    let console = Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    let mut menu = CommandLoop::new(console, service);

    menu.run().await.map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
