//! Integration tests for `SqliteStore` against in-memory and temporary
//! file-backed databases.

use std::{
  path::PathBuf,
  sync::mpsc,
};

use chrono::{DateTime, TimeZone as _, Utc};
use durcov_core::{
  Error as CoreError,
  metric::Metric,
  snapshot::{GlobalStat, RegionStat, Snapshot},
  store::{MetricView, SnapshotStore},
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn observed() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2020, 12, 4, 3, 49, 29).unwrap()
}

fn region(code: &str, name: &str, confirmed: i64, deaths: i64, recovered: i64) -> RegionStat {
  RegionStat {
    name: name.into(),
    slug: name.to_lowercase(),
    code: code.into(),
    confirmed,
    deaths,
    recovered,
    observed_at: observed(),
  }
}

fn snapshot(regions: Vec<RegionStat>) -> Snapshot {
  Snapshot {
    global: GlobalStat {
      confirmed:   9_500_000,
      deaths:      500_000,
      recovered:   0,
      observed_at: observed(),
    },
    regions,
  }
}

fn example() -> Snapshot {
  snapshot(vec![
    region("AF", "Afghanistan", 46_980, 1_822, 37_026),
    region("SG", "Singapore", 58_000, 1_822, 57_000),
  ])
}

async fn ids(s: &SqliteStore) -> Vec<String> {
  s.rows().await.unwrap().into_iter().map(|r| r.id).collect()
}

/// A unique database path under the OS temp dir; removed on drop.
struct TempDb(PathBuf);

impl TempDb {
  fn new() -> Self {
    Self(std::env::temp_dir().join(format!("durcov-{}.db", Uuid::new_v4())))
  }
}

impl Drop for TempDb {
  fn drop(&mut self) {
    for suffix in ["", "-wal", "-shm"] {
      let mut path = self.0.clone().into_os_string();
      path.push(suffix);
      let _ = std::fs::remove_file(path);
    }
  }
}

// ─── Replace ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn replace_writes_global_and_regions() {
  let s = store().await;
  s.replace(example()).await.unwrap();

  let rows = s.rows().await.unwrap();
  assert_eq!(rows.len(), 3);
  assert!(rows[0].is_global());
  assert_eq!(rows[0].name, "Global");
  assert_eq!(rows[0].slug, "global");
  assert_eq!(rows[0].confirmed, 9_500_000);
  assert_eq!(rows[1].id, "AF");
  assert_eq!(rows[1].collected_at, observed());
}

#[tokio::test]
async fn replace_discards_stale_rows() {
  let s = store().await;
  s.replace(example()).await.unwrap();

  s.replace(snapshot(vec![region("DZ", "Algeria", 85_084, 2_464, 54_990)]))
    .await
    .unwrap();

  assert_eq!(ids(&s).await, ["GLOBAL", "DZ"]);
  assert!(matches!(
    s.region_metric("AF", Metric::Deaths).await,
    Err(CoreError::NoRegionMatched { .. })
  ));
}

#[tokio::test]
async fn replace_with_no_regions_keeps_only_global() {
  let s = store().await;
  s.replace(example()).await.unwrap();
  s.replace(snapshot(vec![])).await.unwrap();

  assert_eq!(ids(&s).await, ["GLOBAL"]);
}

#[tokio::test]
async fn duplicate_code_rolls_back() {
  let s = store().await;
  s.replace(example()).await.unwrap();

  let result = s
    .replace(snapshot(vec![
      region("DZ", "Algeria", 1, 1, 1),
      region("DZ", "Algeria again", 2, 2, 2),
    ]))
    .await;

  assert!(matches!(result, Err(CoreError::Storage(_))));
  assert_eq!(ids(&s).await, ["GLOBAL", "AF", "SG"]);
}

#[tokio::test]
async fn reserved_code_is_refused_before_writing() {
  let s = store().await;
  s.replace(example()).await.unwrap();

  let result = s
    .replace(snapshot(vec![region("GLOBAL", "Impostor", 1, 1, 1)]))
    .await;

  assert!(matches!(result, Err(CoreError::ReservedRegionCode(code)) if code == "GLOBAL"));
  assert_eq!(ids(&s).await, ["GLOBAL", "AF", "SG"]);
}

#[tokio::test]
async fn readers_see_old_snapshot_until_commit() {
  let db = TempDb::new();
  let s = SqliteStore::open(&db.0).await.unwrap();
  s.replace(example()).await.unwrap();

  let (tx, rx) = mpsc::channel();
  let path = db.0.clone();
  let hook = move || {
    let reader = rusqlite::Connection::open(&path).unwrap();
    let mut stmt = reader
      .prepare("SELECT id FROM covid_stats ORDER BY id")
      .unwrap();
    let seen: Vec<String> = stmt
      .query_map([], |row| row.get(0))
      .unwrap()
      .collect::<rusqlite::Result<_>>()
      .unwrap();
    tx.send(seen).unwrap();
  };

  let next = snapshot(vec![region("DZ", "Algeria", 85_084, 2_464, 54_990)]);
  s.replace_rows(next.into_rows(), hook).await.unwrap();

  let mid_replace = rx.recv().unwrap();
  assert_eq!(mid_replace, ["AF", "GLOBAL", "SG"]);
  assert_eq!(ids(&s).await, ["GLOBAL", "DZ"]);
}

// ─── Metric view ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn global_active_and_deaths() {
  let s = store().await;
  s.replace(example()).await.unwrap();

  assert_eq!(s.global_metric(Metric::Active).await.unwrap(), 9_000_000);
  assert_eq!(s.global_metric(Metric::Deaths).await.unwrap(), 500_000);
}

#[tokio::test]
async fn region_active_and_deaths() {
  let s = store().await;
  s.replace(example()).await.unwrap();

  let (name, active) = s.region_metric("AF", Metric::Active).await.unwrap();
  assert_eq!(name, "Afghanistan");
  assert_eq!(active, 8_132);

  let (name, deaths) = s.region_metric("SG", Metric::Deaths).await.unwrap();
  assert_eq!(name, "Singapore");
  assert_eq!(deaths, 1_822);
}

#[tokio::test]
async fn negative_active_is_returned_as_is() {
  let s = store().await;
  s.replace(snapshot(vec![region("XX", "Oddland", 10, 8, 7)]))
    .await
    .unwrap();

  let (_, active) = s.region_metric("XX", Metric::Active).await.unwrap();
  assert_eq!(active, -5);
}

#[tokio::test]
async fn unknown_region_is_distinguished() {
  let s = store().await;
  s.replace(example()).await.unwrap();

  let err = s.region_metric("IN", Metric::Active).await.unwrap_err();
  assert!(matches!(
    err,
    CoreError::NoRegionMatched { ref attempted_code } if attempted_code == "IN"
  ));
}

#[tokio::test]
async fn sentinel_is_not_a_region() {
  let s = store().await;
  s.replace(example()).await.unwrap();

  assert!(matches!(
    s.region_metric("GLOBAL", Metric::Deaths).await,
    Err(CoreError::NoRegionMatched { .. })
  ));
}

#[tokio::test]
async fn unsupported_metric_is_reported() {
  let s = store().await;
  s.replace(example()).await.unwrap();

  assert!(matches!(
    s.global_metric(Metric::Confirmed).await,
    Err(CoreError::UnsupportedMetric(Metric::Confirmed))
  ));
  assert!(matches!(
    s.region_metric("AF", Metric::Recovered).await,
    Err(CoreError::UnsupportedMetric(Metric::Recovered))
  ));
}

#[tokio::test]
async fn overflowing_active_is_an_error() {
  let s = store().await;
  let mut snap = snapshot(vec![region("XX", "Oddland", i64::MIN, 1, 0)]);
  snap.global.deaths = i64::MAX;
  snap.global.recovered = 1;
  s.replace(snap).await.unwrap();

  assert!(matches!(
    s.global_metric(Metric::Active).await,
    Err(CoreError::Overflow(Metric::Active))
  ));
  assert!(matches!(
    s.region_metric("XX", Metric::Active).await,
    Err(CoreError::Overflow(Metric::Active))
  ));
  assert_eq!(s.global_metric(Metric::Deaths).await.unwrap(), i64::MAX);
  assert_eq!(
    s.region_metric("XX", Metric::Deaths).await.unwrap(),
    ("Oddland".to_owned(), 1)
  );
}

#[tokio::test]
async fn empty_store_global_is_a_storage_failure() {
  let s = store().await;
  assert!(matches!(
    s.global_metric(Metric::Active).await,
    Err(CoreError::Storage(_))
  ));
}

// ─── Round trip ──────────────────────────────────────────────────────────────

const SUMMARY: &str = r#"{
  "Global": {"TotalConfirmed": 64520350, "TotalDeaths": 1493624, "TotalRecovered": 41488406},
  "Countries": [
    {"Country": "Afghanistan", "CountryCode": "AF", "Slug": "afghanistan",
     "TotalConfirmed": 46980, "TotalDeaths": 1822, "TotalRecovered": 37026,
     "NewConfirmed": 263, "Date": "2020-12-04T03:49:29Z"},
    {"Country": "Albania", "CountryCode": "AL", "Slug": "albania",
     "TotalConfirmed": 39719, "TotalDeaths": 839, "TotalRecovered": 19912,
     "Date": "2020-12-04T03:49:29Z"}
  ],
  "Date": "2020-12-04T03:49:29Z"
}"#;

#[tokio::test]
async fn decode_replace_read_round_trip() {
  let decoded = durcov_feed::decode(SUMMARY.as_bytes()).unwrap();
  let s = store().await;
  s.replace(decoded.clone()).await.unwrap();

  let rows = s.rows().await.unwrap();
  assert_eq!(rows, decoded.clone().into_rows());

  for r in &decoded.regions {
    let (name, deaths) = s.region_metric(&r.code, Metric::Deaths).await.unwrap();
    assert_eq!(name, r.name);
    assert_eq!(deaths, r.deaths);

    let (_, active) = s.region_metric(&r.code, Metric::Active).await.unwrap();
    assert_eq!(active, r.confirmed - r.deaths - r.recovered);
  }
}
