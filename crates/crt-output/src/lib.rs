//! `crt-output` — simulation output writers for the crate-pool simulator.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created                                               |
//! |-----------|-------------|-------------------------------------------------------------|
//! | *(none)*  | CSV         | `trips.csv`, `daily_reports.csv`, `assets.csv`              |
//! | `sqlite`  | SQLite      | `output.db` (tables `trips`, `daily_reports`, `assets`)     |
//! | `parquet` | Parquet     | `trips.parquet`, `daily_reports.parquet`, `assets.parquet`  |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `crt_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crt_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! pool.run(&demand, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AssetRow, CensusRow, TripRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
