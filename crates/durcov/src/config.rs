//! Runtime configuration for the durcov binaries.
//!
//! Values come from an optional TOML file, overridden by `DURCOV_*`
//! environment variables (e.g. `DURCOV_STORE_PATH`, `DURCOV_FEED_URL`).

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, de::DeserializeOwned};

/// Configuration for the `server` binary.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  pub store_path: PathBuf,
}

/// Configuration for the `poll` binary.
#[derive(Debug, Deserialize, Clone)]
pub struct PollConfig {
  pub feed_url:   String,
  pub store_path: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8080 }

/// Load `T` from `path` (if it exists) layered under the environment.
pub fn load<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
  let settings = config::Config::builder()
    .add_source(config::File::from(path.to_path_buf()).required(false))
    .add_source(config::Environment::with_prefix("DURCOV"))
    .build()
    .context("failed to read config file")?;

  settings
    .try_deserialize()
    .context("failed to deserialise configuration")
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
