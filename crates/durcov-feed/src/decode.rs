//! Strict structural decoding of the summary document.
//!
//! The wire records below mirror only the fields we keep. Anything else in
//! the document ("NewConfirmed", "Premium", ...) is ignored; any missing
//! field, wrongly-typed value or unparseable timestamp rejects the whole
//! document.

use chrono::{DateTime, Utc};
use durcov_core::snapshot::{GlobalStat, RegionStat, Snapshot};
use serde::Deserialize;

use crate::Result;

// ─── Wire shapes ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct WireSummary {
  #[serde(rename = "Global")]
  global:    WireGlobal,
  #[serde(rename = "Countries")]
  countries: Vec<WireCountry>,
  /// The global object carries no timestamp of its own.
  #[serde(rename = "Date")]
  date:      DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireGlobal {
  total_confirmed: i64,
  total_deaths:    i64,
  total_recovered: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireCountry {
  country:         String,
  slug:            String,
  country_code:    String,
  total_confirmed: i64,
  total_deaths:    i64,
  total_recovered: i64,
  date:            DateTime<Utc>,
}

impl WireCountry {
  fn into_region(self) -> RegionStat {
    RegionStat {
      name:        self.country,
      slug:        self.slug,
      code:        self.country_code.to_uppercase(),
      confirmed:   self.total_confirmed,
      deaths:      self.total_deaths,
      recovered:   self.total_recovered,
      observed_at: self.date,
    }
  }
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Decode a raw summary document into a [`Snapshot`].
///
/// Region order follows the `Countries` array.
pub fn decode(bytes: &[u8]) -> Result<Snapshot> {
  let wire: WireSummary = serde_json::from_slice(bytes)?;

  Ok(Snapshot {
    global:  GlobalStat {
      confirmed:   wire.global.total_confirmed,
      deaths:      wire.global.total_deaths,
      recovered:   wire.global.total_recovered,
      observed_at: wire.date,
    },
    regions: wire
      .countries
      .into_iter()
      .map(WireCountry::into_region)
      .collect(),
  })
}
