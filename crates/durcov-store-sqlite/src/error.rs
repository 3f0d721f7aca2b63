//! Error type for `durcov-store-sqlite`.
//!
//! Internal to the backend; everything crossing the
//! [`durcov_core::store`] traits is converted into
//! [`durcov_core::Error::Storage`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// The sentinel row is written by every replace; its absence means the
  /// store has never been loaded.
  #[error("global row missing; has a snapshot been loaded?")]
  MissingGlobal,
}

impl From<Error> for durcov_core::Error {
  fn from(err: Error) -> Self { Self::storage(err) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
