//! Encoding and decoding helpers between domain types and SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings; counters as INTEGER.

use chrono::{DateTime, Utc};
use durcov_core::{
  Error as CoreError,
  metric::Metric,
  snapshot::PersistedRow,
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a full `covid_stats` row.
pub struct RawRow {
  pub id:           String,
  pub name:         String,
  pub slug:         String,
  pub confirmed:    i64,
  pub deaths:       i64,
  pub recovered:    i64,
  pub collected_at: String,
}

impl RawRow {
  pub fn into_row(self) -> Result<PersistedRow> {
    Ok(PersistedRow {
      id:           self.id,
      name:         self.name,
      slug:         self.slug,
      confirmed:    self.confirmed,
      deaths:       self.deaths,
      recovered:    self.recovered,
      collected_at: decode_dt(&self.collected_at)?,
    })
  }
}

/// The subset of a row needed to answer a metric query.
pub struct Counts {
  pub name:      String,
  pub confirmed: i64,
  pub deaths:    i64,
  pub recovered: i64,
}

// ─── Metric projection ───────────────────────────────────────────────────────

/// `None` when the metric overflows for the given counts.
pub type Projection = fn(&Counts) -> Option<i64>;

fn active(c: &Counts) -> Option<i64> { Metric::active(c.confirmed, c.deaths, c.recovered) }

fn deaths(c: &Counts) -> Option<i64> { Some(c.deaths) }

/// How to compute `metric` from a row, or `UnsupportedMetric` if this view
/// does not implement it.
pub fn projection(metric: Metric) -> Result<Projection, CoreError> {
  match metric {
    Metric::Active => Ok(active as Projection),
    Metric::Deaths => Ok(deaths as Projection),
    other => Err(CoreError::UnsupportedMetric(other)),
  }
}
