//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use crt_asset::{Asset, TripLog};
use crt_core::NaiveDate;
use crt_sim::{Census, SimObserver};

use crate::row::{AssetRow, CensusRow, TripRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams the daily census to any [`OutputWriter`]
/// backend and dumps the trip log and asset table when the run ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `pool.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `pool.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, date: NaiveDate, census: &Census) {
        let result = self.writer.write_census(&CensusRow::new(date, census));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_date: NaiveDate, trips: &TripLog, assets: &[Asset]) {
        let trip_rows: Vec<TripRow> = trips.dump().iter().map(TripRow::from).collect();
        let result = self.writer.write_trips(&trip_rows);
        self.store_err(result);

        let asset_rows: Vec<AssetRow> = assets.iter().map(AssetRow::from).collect();
        let result = self.writer.write_assets(&asset_rows);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
