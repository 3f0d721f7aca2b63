//! Upstream feed codec for durcov.
//!
//! Converts the statistics feed's JSON document into a
//! [`durcov_core::snapshot::Snapshot`], and fetches that document over HTTP.
//!
//! # Quick start
//!
//! ```no_run
//! # async fn run() -> durcov_feed::Result<()> {
//! let client = durcov_feed::FeedClient::new("https://api.covid19api.com/summary")?;
//! let snapshot = client.fetch().await?;
//! println!("{} regions", snapshot.regions.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod decode;

pub mod error;

pub use client::FeedClient;
pub use decode::decode;
pub use error::{Error, Result};
