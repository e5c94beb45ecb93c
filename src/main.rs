use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskd::config::Config;
use taskd::http::{build_router, AppState};
use taskd::store::TaskStore;

#[derive(Parser)]
#[command(
    name = "taskd",
    version,
    about = "File-backed task CRUD service over HTTP"
)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Directory holding the persisted task collection
    #[arg(long, default_value = ".taskd")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("taskd=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::new(cli.bind, &cli.data_dir);

    let store = TaskStore::new(&config);
    store.init().await.context("initialize task store")?;
    info!(path = %store.path().display(), "task store ready");

    let app = build_router(AppState {
        store: Arc::new(store),
    });

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("bind {}", config.bind))?;
    info!(addr = %config.bind, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
