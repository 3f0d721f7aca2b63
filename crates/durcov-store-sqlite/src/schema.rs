//! SQL schema for the durcov SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per region plus the 'GLOBAL' sentinel row.
-- Fully replaced on every ingestion; no history is kept.
CREATE TABLE IF NOT EXISTS covid_stats (
    id           TEXT PRIMARY KEY,   -- region code or 'GLOBAL'
    name         TEXT NOT NULL,
    slug         TEXT NOT NULL,
    confirmed    INTEGER NOT NULL,
    deaths       INTEGER NOT NULL,
    recovered    INTEGER NOT NULL,
    collected_at TEXT NOT NULL       -- RFC 3339 UTC
);

PRAGMA user_version = 1;
";
