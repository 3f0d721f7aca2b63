//! durcov HTTP server.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! store, and answers `POST /message` with plain-text replies.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use durcov::{AppState, ServerConfig, config};
use durcov_store_sqlite::SqliteStore;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about = "durcov statistics bot server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  durcov::init_tracing();

  let cli = Cli::parse();
  let server_cfg: ServerConfig = config::load(&cli.config)?;

  let store_path = config::expand_tilde(&server_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let app = durcov::router(AppState::new(store));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
