//! durcov ingestion job.
//!
//! Fetches one snapshot from the configured feed, replaces the store with
//! it, and exits. Any failure aborts the cycle with a non-zero exit status
//! and leaves the previous snapshot in place. Schedule externally; never run
//! two at once against the same store.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use durcov::{PollConfig, config};
use durcov_feed::FeedClient;
use durcov_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "Fetch the latest snapshot into the durcov store")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  durcov::init_tracing();

  let cli = Cli::parse();
  let poll_cfg: PollConfig = config::load(&cli.config)?;

  let client = FeedClient::new(&poll_cfg.feed_url).context("invalid feed url")?;

  let store_path = config::expand_tilde(&poll_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  durcov::ingest(&client, &store)
    .await
    .context("ingestion cycle failed")?;

  Ok(())
}
