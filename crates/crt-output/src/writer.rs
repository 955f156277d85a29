//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AssetRow, CensusRow, OutputResult, TripRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// Errors surface through the observer's stored error; see
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one day's census.
    fn write_census(&mut self, row: &CensusRow) -> OutputResult<()>;

    /// Write a batch of trips.
    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()>;

    /// Write a batch of assets.
    fn write_assets(&mut self, rows: &[AssetRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
