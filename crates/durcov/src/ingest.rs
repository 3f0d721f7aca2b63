//! One ingestion cycle: fetch the feed, then replace the store.
//!
//! Only one cycle may run against a store at a time; concurrent cycles are
//! not coordinated.

use durcov_core::store::SnapshotStore;
use durcov_feed::FeedClient;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
  #[error("feed error: {0}")]
  Feed(#[from] durcov_feed::Error),

  #[error("store error: {0}")]
  Store(#[from] durcov_core::Error),
}

/// Fetch a snapshot and replace everything persisted in `store` with it.
/// Returns the number of regions written.
pub async fn ingest<S: SnapshotStore>(
  client: &FeedClient,
  store: &S,
) -> Result<usize, IngestError> {
  let snapshot = client.fetch().await?;
  let regions = snapshot.regions.len();
  let observed_at = snapshot.global.observed_at;

  store.replace(snapshot).await?;

  tracing::info!(regions, %observed_at, url = %client.url(), "ingested snapshot");
  Ok(regions)
}
