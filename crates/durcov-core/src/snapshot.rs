//! Snapshot — one complete pull of global and per-region statistics.
//!
//! A snapshot is built once per ingestion cycle and handed by value to a
//! [`crate::store::SnapshotStore`], which replaces everything persisted
//! before it. No history is retained.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Global sentinel ─────────────────────────────────────────────────────────

/// Row identifier reserved for the global aggregate.
pub const GLOBAL_ID: &str = "GLOBAL";
/// Display name stored on the global row.
pub const GLOBAL_NAME: &str = "Global";
/// Slug stored on the global row.
pub const GLOBAL_SLUG: &str = "global";

// ─── Statistics ──────────────────────────────────────────────────────────────

/// The worldwide aggregate. Has no key of its own; it is persisted under
/// [`GLOBAL_ID`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStat {
  pub confirmed:   i64,
  pub deaths:      i64,
  pub recovered:   i64,
  pub observed_at: DateTime<Utc>,
}

/// Statistics for a single region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStat {
  pub name:        String,
  pub slug:        String,
  /// Upper-cased natural key, e.g. `AF`.
  pub code:        String,
  pub confirmed:   i64,
  pub deaths:      i64,
  pub recovered:   i64,
  pub observed_at: DateTime<Utc>,
}

/// One global aggregate plus the regions in upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
  pub global:  GlobalStat,
  pub regions: Vec<RegionStat>,
}

impl Snapshot {
  /// The first region whose code would collide with the global row, if any.
  pub fn reserved_code(&self) -> Option<&str> {
    self
      .regions
      .iter()
      .map(|r| r.code.as_str())
      .find(|code| code.eq_ignore_ascii_case(GLOBAL_ID))
  }

  /// Flatten into the rows a backend persists: the global sentinel first,
  /// then one row per region.
  pub fn into_rows(self) -> Vec<PersistedRow> {
    let mut rows = Vec::with_capacity(self.regions.len() + 1);
    rows.push(PersistedRow {
      id:           GLOBAL_ID.to_owned(),
      name:         GLOBAL_NAME.to_owned(),
      slug:         GLOBAL_SLUG.to_owned(),
      confirmed:    self.global.confirmed,
      deaths:       self.global.deaths,
      recovered:    self.global.recovered,
      collected_at: self.global.observed_at,
    });
    rows.extend(self.regions.into_iter().map(|r| PersistedRow {
      id:           r.code,
      name:         r.name,
      slug:         r.slug,
      confirmed:    r.confirmed,
      deaths:       r.deaths,
      recovered:    r.recovered,
      collected_at: r.observed_at,
    }));
    rows
  }
}

// ─── Storage projection ──────────────────────────────────────────────────────

/// A row as persisted by a backend. `id` is the region code, or
/// [`GLOBAL_ID`] for the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRow {
  pub id:           String,
  pub name:         String,
  pub slug:         String,
  pub confirmed:    i64,
  pub deaths:       i64,
  pub recovered:    i64,
  pub collected_at: DateTime<Utc>,
}

impl PersistedRow {
  pub fn is_global(&self) -> bool { self.id == GLOBAL_ID }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  fn region(code: &str) -> RegionStat {
    RegionStat {
      name:        format!("Region {code}"),
      slug:        code.to_lowercase(),
      code:        code.to_owned(),
      confirmed:   3,
      deaths:      2,
      recovered:   1,
      observed_at: Utc.with_ymd_and_hms(2020, 12, 4, 3, 49, 29).unwrap(),
    }
  }

  fn snapshot(codes: &[&str]) -> Snapshot {
    Snapshot {
      global:  GlobalStat {
        confirmed:   30,
        deaths:      20,
        recovered:   10,
        observed_at: Utc.with_ymd_and_hms(2020, 12, 4, 3, 49, 29).unwrap(),
      },
      regions: codes.iter().map(|c| region(c)).collect(),
    }
  }

  #[test]
  fn into_rows_puts_global_first_and_keeps_order() {
    let rows = snapshot(&["AF", "SG", "AL"]).into_rows();
    let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["GLOBAL", "AF", "SG", "AL"]);
    assert!(rows[0].is_global());
    assert_eq!(rows[0].name, "Global");
    assert_eq!(rows[0].confirmed, 30);
    assert_eq!(rows[2].name, "Region SG");
  }

  #[test]
  fn reserved_code_detects_sentinel_collision() {
    assert_eq!(snapshot(&["AF", "SG"]).reserved_code(), None);
    assert_eq!(snapshot(&["AF", "global"]).reserved_code(), Some("global"));
  }
}
