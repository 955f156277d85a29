//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `trips.csv`
//! - `daily_reports.csv`
//! - `assets.csv`
//!
//! [`CsvWriter::write_demand`] additionally saves the demand input as
//! `demand.csv` so it can be lined up with `daily_reports.csv`.
//!
//! Dates are ISO-8601 (`2024-01-31`); an open or lost trip has an empty
//! `end` field.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crt_core::DemandSeries;

use crate::{AssetRow, CensusRow, OutputResult, TripRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    trips:    Writer<File>,
    reports:  Writer<File>,
    assets:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trips = Writer::from_path(dir.join("trips.csv"))?;
        trips.write_record(["trip_id", "asset_id", "start", "end", "state"])?;

        let mut reports = Writer::from_path(dir.join("daily_reports.csv"))?;
        reports.write_record(["date", "idle", "in_use", "lost"])?;

        let mut assets = Writer::from_path(dir.join("assets.csv"))?;
        assets.write_record(["asset_id", "created_at", "state"])?;

        Ok(Self {
            trips,
            reports,
            assets,
            finished: false,
        })
    }

    /// Write `demand` to `dir/demand.csv` as `date,demand` rows.
    pub fn write_demand(dir: &Path, demand: &DemandSeries) -> OutputResult<()> {
        let mut out = Writer::from_path(dir.join("demand.csv"))?;
        out.write_record(["date", "demand"])?;
        for (date, value) in demand.iter() {
            out.write_record(&[date.to_string(), value.to_string()])?;
        }
        out.flush()?;
        Ok(())
    }
}

impl OutputWriter for CsvWriter {
    fn write_census(&mut self, row: &CensusRow) -> OutputResult<()> {
        self.reports.write_record(&[
            row.date.to_string(),
            row.idle.to_string(),
            row.in_use.to_string(),
            row.lost.to_string(),
        ])?;
        Ok(())
    }

    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        for row in rows {
            self.trips.write_record(&[
                row.trip_id.to_string(),
                row.asset_id.to_string(),
                row.start.to_string(),
                row.end.map(|d| d.to_string()).unwrap_or_default(),
                row.state.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_assets(&mut self, rows: &[AssetRow]) -> OutputResult<()> {
        for row in rows {
            self.assets.write_record(&[
                row.asset_id.to_string(),
                row.created_at.to_string(),
                row.state.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trips.flush()?;
        self.reports.flush()?;
        self.assets.flush()?;
        Ok(())
    }
}
