//! Metric kinds and the derived "active" computation.

use serde::{Deserialize, Serialize};

/// A data point that can be requested from a [`crate::store::MetricView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
  Confirmed,
  Deaths,
  Recovered,
  /// Derived on read; never stored.
  Active,
}

impl Metric {
  /// The label used when rendering a result for a human.
  pub fn label(self) -> &'static str {
    match self {
      Self::Confirmed => "Confirmed Cases",
      Self::Deaths => "Deaths",
      Self::Recovered => "Recovered",
      Self::Active => "Active Cases",
    }
  }

  /// `confirmed - (deaths + recovered)`, or `None` if that does not fit in
  /// an `i64`.
  ///
  /// Not clamped at zero: inconsistent upstream data yields a negative
  /// count, which is returned as-is.
  pub fn active(confirmed: i64, deaths: i64, recovered: i64) -> Option<i64> {
    deaths
      .checked_add(recovered)
      .and_then(|removed| confirmed.checked_sub(removed))
  }
}
