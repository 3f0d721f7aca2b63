//! The `SnapshotStore` and `MetricView` traits.
//!
//! Implemented by storage backends (e.g. `durcov-store-sqlite`). The poller
//! depends on [`SnapshotStore`]; the bot depends only on [`MetricView`].
//!
//! Backends report failures as [`crate::Error`] so callers can tell an
//! unknown region apart from an unavailable database without knowing which
//! backend they are talking to.

use std::future::Future;

use crate::{
  Result,
  metric::Metric,
  snapshot::{PersistedRow, Snapshot},
};

/// Write side: full, destructive replacement of the persisted dataset.
pub trait SnapshotStore: Send + Sync {
  /// Atomically replace every persisted row with `snapshot`.
  ///
  /// Readers observe either the previous snapshot or the new one in full.
  /// On error nothing is committed. Concurrent calls are not coordinated;
  /// callers run at most one ingestion at a time.
  fn replace(
    &self,
    snapshot: Snapshot,
  ) -> impl Future<Output = Result<()>> + Send + '_;

  /// Every persisted row, global sentinel first, then by id.
  fn rows(&self) -> impl Future<Output = Result<Vec<PersistedRow>>> + Send + '_;
}

/// Read side: raw and derived metrics over the latest snapshot.
pub trait MetricView: Send + Sync {
  /// The requested metric for the global aggregate.
  fn global_metric(
    &self,
    metric: Metric,
  ) -> impl Future<Output = Result<i64>> + Send + '_;

  /// The requested metric for the region with `code`, together with the
  /// region's display name.
  ///
  /// Fails with [`crate::Error::NoRegionMatched`] when no row has that code.
  fn region_metric<'a>(
    &'a self,
    code: &'a str,
    metric: Metric,
  ) -> impl Future<Output = Result<(String, i64)>> + Send + 'a;
}
