//! # Carlot Server
//!
//! Vehicle catalog and listing service.
//!
//! The binary wires configuration, the SQLite-backed catalog store, and the
//! Axum router together, then serves until interrupted. Storage lives in a
//! single database file created on first startup.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carlot_core::SqliteCatalogRepository;
use carlot_server::{AppState, create_router, infra::config::Config};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "carlot-server")]
#[command(about = "Vehicle catalog and listing service")]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long, env = "CARLOT_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "CARLOT_HOST")]
    host: Option<String>,

    /// SQLite database file (overrides config)
    #[arg(long, env = "CARLOT_DB_PATH")]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(database) = cli.database {
        config.database.path = database;
    }

    info!(
        db = %config.database.path.display(),
        "opening catalog store"
    );
    let pool = carlot_core::database::connect(&config.database.path)
        .await
        .context("failed to open catalog database")?;
    let catalog = Arc::new(SqliteCatalogRepository::new(pool));

    let addr = config.bind_addr()?;
    let state = AppState::new(catalog, Arc::new(config));
    let app = create_router(state);

    info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
