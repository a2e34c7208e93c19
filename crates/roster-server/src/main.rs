//! roster-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), creates an
//! in-memory record store, and serves the JSON API over HTTP.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use roster_api::AppState;
use roster_server::ServerConfig;
use roster_store_memory::MemoryStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Roster record server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Override the configured listen host.
  #[arg(long)]
  host: Option<String>,

  /// Override the configured listen port (`0` picks a free port).
  #[arg(long)]
  port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut server_cfg = ServerConfig::load(&cli.config)?;
  if let Some(host) = cli.host {
    server_cfg.host = host;
  }
  if let Some(port) = cli.port {
    server_cfg.port = port;
  }

  let mut state = AppState::new(MemoryStore::new());
  if let Some(dir) = &server_cfg.export_dir {
    tokio::fs::create_dir_all(dir)
      .await
      .with_context(|| format!("failed to create export dir {dir:?}"))?;
    state = state.with_export_dir(dir);
  }

  let app = roster_api::api_router(state);
  let address = server_cfg.address();

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  let local = listener.local_addr().context("failed to read bound address")?;

  tracing::info!("Listening on http://{local}");
  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
