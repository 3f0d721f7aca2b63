//! Application wiring for durcov: configuration, the plain-text HTTP
//! surface, and the ingestion cycle.
//!
//! Two binaries build on this crate: `server` answers messages over HTTP and
//! `poll` runs one ingestion cycle and exits.

pub mod config;
pub mod http;
pub mod ingest;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub use crate::config::{PollConfig, ServerConfig};
pub use crate::http::{AppState, router};
pub use crate::ingest::{IngestError, ingest};

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();
}
