//! Parquet output backend (feature `parquet`).
//!
//! Creates three files in the configured output directory:
//! - `trips.parquet`
//! - `daily_reports.parquet`
//! - `assets.parquet`
//!
//! Dates are stored as `Date32` (days since 1970-01-01); `trips.end` is
//! nullable.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Date32Builder, StringBuilder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::Datelike;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crt_core::NaiveDate;

use crate::writer::OutputWriter;
use crate::{AssetRow, CensusRow, OutputResult, TripRow};

/// `NaiveDate::num_days_from_ce()` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

fn date32(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

fn trip_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("trip_id",  DataType::UInt32, false),
        Field::new("asset_id", DataType::UInt32, false),
        Field::new("start",    DataType::Date32, false),
        Field::new("end",      DataType::Date32, true),
        Field::new("state",    DataType::Utf8,   false),
    ]))
}

fn census_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("date",   DataType::Date32, false),
        Field::new("idle",   DataType::UInt64, false),
        Field::new("in_use", DataType::UInt64, false),
        Field::new("lost",   DataType::UInt64, false),
    ]))
}

fn asset_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("asset_id",   DataType::UInt32, false),
        Field::new("created_at", DataType::Date32, false),
        Field::new("state",      DataType::Utf8,   false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

fn open(dir: &Path, name: &str, schema: &Arc<Schema>) -> OutputResult<ArrowWriter<File>> {
    let file = File::create(dir.join(name))?;
    Ok(ArrowWriter::try_new(file, Arc::clone(schema), Some(snappy_props()))?)
}

/// Writes simulation output to three Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    trips:         Option<ArrowWriter<File>>,
    reports:       Option<ArrowWriter<File>>,
    assets:        Option<ArrowWriter<File>>,
    trip_schema:   Arc<Schema>,
    census_schema: Arc<Schema>,
    asset_schema:  Arc<Schema>,
}

impl ParquetWriter {
    /// Create all three Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let trip_schema = trip_schema();
        let census_schema = census_schema();
        let asset_schema = asset_schema();

        Ok(Self {
            trips:   Some(open(dir, "trips.parquet", &trip_schema)?),
            reports: Some(open(dir, "daily_reports.parquet", &census_schema)?),
            assets:  Some(open(dir, "assets.parquet", &asset_schema)?),
            trip_schema,
            census_schema,
            asset_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_census(&mut self, row: &CensusRow) -> OutputResult<()> {
        let Some(writer) = self.reports.as_mut() else {
            return Ok(());
        };

        let mut dates  = Date32Builder::new();
        let mut idle   = UInt64Builder::new();
        let mut in_use = UInt64Builder::new();
        let mut lost   = UInt64Builder::new();

        dates.append_value(date32(row.date));
        idle.append_value(row.idle);
        in_use.append_value(row.in_use);
        lost.append_value(row.lost);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.census_schema),
            vec![
                Arc::new(dates.finish()),
                Arc::new(idle.finish()),
                Arc::new(in_use.finish()),
                Arc::new(lost.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.trips.as_mut() else {
            return Ok(());
        };

        let mut trip_ids  = UInt32Builder::new();
        let mut asset_ids = UInt32Builder::new();
        let mut starts    = Date32Builder::new();
        let mut ends      = Date32Builder::new();
        let mut states    = StringBuilder::new();

        for row in rows {
            trip_ids.append_value(row.trip_id);
            asset_ids.append_value(row.asset_id);
            starts.append_value(date32(row.start));
            ends.append_option(row.end.map(date32));
            states.append_value(row.state.as_str());
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.trip_schema),
            vec![
                Arc::new(trip_ids.finish()),
                Arc::new(asset_ids.finish()),
                Arc::new(starts.finish()),
                Arc::new(ends.finish()),
                Arc::new(states.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_assets(&mut self, rows: &[AssetRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.assets.as_mut() else {
            return Ok(());
        };

        let mut asset_ids = UInt32Builder::new();
        let mut created   = Date32Builder::new();
        let mut states    = StringBuilder::new();

        for row in rows {
            asset_ids.append_value(row.asset_id);
            created.append_value(date32(row.created_at));
            states.append_value(row.state.as_str());
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.asset_schema),
            vec![
                Arc::new(asset_ids.finish()),
                Arc::new(created.finish()),
                Arc::new(states.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        for slot in [&mut self.trips, &mut self.reports, &mut self.assets] {
            if let Some(w) = slot.take() {
                w.close()?;
            }
        }
        Ok(())
    }
}
