//! Async HTTP client for the upstream summary feed.

use std::time::Duration;

use durcov_core::snapshot::Snapshot;
use reqwest::{Client, Url};

use crate::{Error, Result, decode};

/// Fetches and decodes the summary document from a fixed endpoint.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct FeedClient {
  client: Client,
  url:    Url,
}

impl FeedClient {
  /// Build a client for `url`, which must be an absolute http(s) URL.
  pub fn new(url: &str) -> Result<Self> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl {
      url:    url.to_owned(),
      reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
      return Err(Error::InvalidUrl {
        url:    url.to_owned(),
        reason: "expected an absolute http or https url".to_owned(),
      });
    }

    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, url: parsed })
  }

  pub fn url(&self) -> &Url { &self.url }

  /// `GET` the feed and decode the body. No retries.
  pub async fn fetch(&self) -> Result<Snapshot> {
    tracing::debug!(url = %self.url, "fetching snapshot");
    let resp = self.client.get(self.url.clone()).send().await?;

    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Status(status));
    }

    let body = resp.bytes().await?;
    let snapshot = decode(&body)?;
    tracing::debug!(regions = snapshot.regions.len(), "decoded snapshot");
    Ok(snapshot)
  }
}
