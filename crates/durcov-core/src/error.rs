//! Error types for `durcov-core`.
//!
//! These are the failures a storage backend surfaces through
//! [`crate::store::SnapshotStore`] and [`crate::store::MetricView`]. Only
//! [`Error::NoRegionMatched`] is expected during normal operation; the bot
//! turns it into its own user message.

use thiserror::Error;

use crate::metric::Metric;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no region matched with code {attempted_code}")]
  NoRegionMatched { attempted_code: String },

  #[error("unsupported metric for this view: {0:?}")]
  UnsupportedMetric(Metric),

  /// The stored counts cannot produce the metric without overflowing.
  #[error("{0:?} overflows for the stored counts")]
  Overflow(Metric),

  #[error("region code {0:?} collides with the global sentinel")]
  ReservedRegionCode(String),

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap any backend failure as a generic storage error.
  pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Storage(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
