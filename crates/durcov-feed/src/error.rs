//! Error types for the durcov feed codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The document did not match the expected shape. Nothing is salvaged.
  #[error("malformed snapshot document: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("invalid feed url {url:?}: {reason}")]
  InvalidUrl { url: String, reason: String },

  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("feed responded with status {0}")]
  Status(reqwest::StatusCode),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
