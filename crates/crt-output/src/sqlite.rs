//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `trips`, `daily_reports` and `assets`.  Dates are stored as
//! ISO-8601 `TEXT`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AssetRow, CensusRow, OutputResult, TripRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS trips (
                 trip_id  INTEGER PRIMARY KEY,
                 asset_id INTEGER NOT NULL,
                 start    TEXT    NOT NULL,
                 \"end\"  TEXT,
                 state    TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS daily_reports (
                 date   TEXT    PRIMARY KEY,
                 idle   INTEGER NOT NULL,
                 in_use INTEGER NOT NULL,
                 lost   INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS assets (
                 asset_id   INTEGER PRIMARY KEY,
                 created_at TEXT    NOT NULL,
                 state      TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_census(&mut self, row: &CensusRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO daily_reports (date, idle, in_use, lost) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![row.date.to_string(), row.idle, row.in_use, row.lost],
        )?;
        Ok(())
    }

    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO trips (trip_id, asset_id, start, \"end\", state) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.trip_id,
                    row.asset_id,
                    row.start.to_string(),
                    row.end.map(|d| d.to_string()),
                    row.state.as_str(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_assets(&mut self, rows: &[AssetRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO assets (asset_id, created_at, state) VALUES (?1, ?2, ?3)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.asset_id,
                    row.created_at.to_string(),
                    row.state.as_str(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
