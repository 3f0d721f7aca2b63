//! [`SqliteStore`] — the SQLite implementation of [`SnapshotStore`] and
//! [`MetricView`].

use std::path::Path;

use durcov_core::{
  Error as CoreError,
  metric::Metric,
  snapshot::{GLOBAL_ID, PersistedRow, Snapshot},
  store::{MetricView, SnapshotStore},
};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  encode::{Counts, RawRow, encode_dt, projection},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A durcov snapshot store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Isolation
/// between a running replace and concurrent readers is SQLite's; the store
/// itself holds no lock.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Truncate and reload inside one transaction. `before_commit` runs after
  /// every row is written and before the commit is issued.
  pub(crate) async fn replace_rows(
    &self,
    rows: Vec<PersistedRow>,
    before_commit: impl FnOnce() + Send + 'static,
  ) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM covid_stats", [])?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO covid_stats (
               id, name, slug, confirmed, deaths, recovered, collected_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          )?;
          for row in &rows {
            stmt.execute(rusqlite::params![
              row.id,
              row.name,
              row.slug,
              row.confirmed,
              row.deaths,
              row.recovered,
              encode_dt(row.collected_at),
            ])?;
          }
        }
        before_commit();
        tx.commit()?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn counts(&self, id: String) -> Result<Option<Counts>> {
    let counts = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT name, confirmed, deaths, recovered
             FROM covid_stats WHERE id = ?1",
            rusqlite::params![id],
            |row| {
              Ok(Counts {
                name:      row.get(0)?,
                confirmed: row.get(1)?,
                deaths:    row.get(2)?,
                recovered: row.get(3)?,
              })
            },
          )
          .optional()?)
      })
      .await?;
    Ok(counts)
  }

  async fn all_rows(&self) -> Result<Vec<PersistedRow>> {
    let raws: Vec<RawRow> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, slug, confirmed, deaths, recovered, collected_at
           FROM covid_stats
           ORDER BY id <> ?1, id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![GLOBAL_ID], |row| {
            Ok(RawRow {
              id:           row.get(0)?,
              name:         row.get(1)?,
              slug:         row.get(2)?,
              confirmed:    row.get(3)?,
              deaths:       row.get(4)?,
              recovered:    row.get(5)?,
              collected_at: row.get(6)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRow::into_row).collect()
  }
}

// ─── SnapshotStore impl ──────────────────────────────────────────────────────

impl SnapshotStore for SqliteStore {
  async fn replace(&self, snapshot: Snapshot) -> durcov_core::Result<()> {
    if let Some(code) = snapshot.reserved_code() {
      return Err(CoreError::ReservedRegionCode(code.to_owned()));
    }

    let rows = snapshot.into_rows();
    let count = rows.len();
    self.replace_rows(rows, || {}).await?;

    tracing::info!(rows = count, "replaced persisted snapshot");
    Ok(())
  }

  async fn rows(&self) -> durcov_core::Result<Vec<PersistedRow>> {
    Ok(self.all_rows().await?)
  }
}

// ─── MetricView impl ─────────────────────────────────────────────────────────

impl MetricView for SqliteStore {
  async fn global_metric(&self, metric: Metric) -> durcov_core::Result<i64> {
    let project = projection(metric)?;
    tracing::debug!(?metric, "reading global metric");

    let counts = self
      .counts(GLOBAL_ID.to_owned())
      .await?
      .ok_or(Error::MissingGlobal)?;
    project(&counts).ok_or(CoreError::Overflow(metric))
  }

  async fn region_metric(
    &self,
    code: &str,
    metric: Metric,
  ) -> durcov_core::Result<(String, i64)> {
    let project = projection(metric)?;
    tracing::debug!(code, ?metric, "reading region metric");

    // The sentinel is not a region, even though it shares the id column.
    let counts = if code == GLOBAL_ID {
      None
    } else {
      self.counts(code.to_owned()).await?
    };

    match counts {
      Some(counts) => {
        let value = project(&counts).ok_or(CoreError::Overflow(metric))?;
        Ok((counts.name, value))
      }
      None => Err(CoreError::NoRegionMatched {
        attempted_code: code.to_owned(),
      }),
    }
  }
}
