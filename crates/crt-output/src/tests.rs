//! Integration tests for crt-output.

use crt_asset::AssetState;
use crt_core::NaiveDate;
use tempfile::TempDir;

use crate::row::{AssetRow, CensusRow, TripRow};

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn trip_row(trip_id: u32, end: Option<NaiveDate>, state: AssetState) -> TripRow {
    TripRow { trip_id, asset_id: trip_id + 100, start: day(1), end, state }
}

fn census_row(d: u32) -> CensusRow {
    CensusRow { date: day(d), idle: 7, in_use: 2, lost: 1 }
}

fn asset_row(asset_id: u32) -> AssetRow {
    AssetRow { asset_id, created_at: day(1), state: AssetState::Idle }
}

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("trips.csv").exists());
        assert!(dir.path().join("daily_reports.csv").exists());
        assert!(dir.path().join("assets.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir, "trips.csv"), ["trip_id", "asset_id", "start", "end", "state"]);
        assert_eq!(headers(&dir, "daily_reports.csv"), ["date", "idle", "in_use", "lost"]);
        assert_eq!(headers(&dir, "assets.csv"), ["asset_id", "created_at", "state"]);
    }

    #[test]
    fn csv_trip_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trips(&[
            trip_row(1, Some(day(9)), AssetState::Idle),
            trip_row(2, None, AssetState::InUse),
            trip_row(3, None, AssetState::Lost),
        ])
        .unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "trips.csv");
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][1], "101");        // asset_id
        assert_eq!(&rows[0][2], "2024-01-01"); // start
        assert_eq!(&rows[0][3], "2024-01-09"); // end
        assert_eq!(&rows[0][4], "idle");
        assert_eq!(&rows[1][3], "");           // open trip
        assert_eq!(&rows[1][4], "in_use");
        assert_eq!(&rows[2][4], "lost");
    }

    #[test]
    fn csv_census_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_census(&census_row(3)).unwrap();
        w.write_census(&census_row(4)).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "daily_reports.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].iter().collect::<Vec<_>>(),
            ["2024-01-03", "7", "2", "1"]
        );
    }

    #[test]
    fn csv_asset_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_assets(&[asset_row(1), asset_row(2)]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "assets.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].iter().collect::<Vec<_>>(), ["2", "2024-01-01", "idle"]);
    }

    #[test]
    fn csv_demand_export() {
        use crt_core::DemandSeries;

        let dir = tmp();
        let demand = DemandSeries::daily(day(30), [4, 0, 11]).unwrap();
        CsvWriter::write_demand(dir.path(), &demand).unwrap();

        assert_eq!(headers(&dir, "demand.csv"), ["date", "demand"]);
        let rows = records(&dir, "demand.csv");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].iter().collect::<Vec<_>>(), ["2024-02-01", "11"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_batches_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trips(&[]).unwrap();
        w.write_assets(&[]).unwrap();
    }

    #[test]
    fn integration_csv() {
        use crt_policy::PolicyKind;
        use crt_sim::{PoolBuilder, PoolConfig};
        use crt_core::DemandSeries;

        use crate::observer::SimOutputObserver;

        let config = PoolConfig::new(4, 10.0, 0.0, 0.0, day(1))
            .with_policy(AssetState::Idle, PolicyKind::DelayedFifo { delay: 0 })
            .with_policy(AssetState::InUse, PolicyKind::ConstantDelay { delay: 1 });
        let mut pool = PoolBuilder::new(config).build().unwrap();
        let demand = DemandSeries::daily(day(1), [2, 0, 0, 0, 0, 0]).unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        pool.run(&demand, &mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        assert_eq!(records(&dir, "daily_reports.csv").len(), 6);
        assert_eq!(records(&dir, "assets.csv").len(), 4);

        // Two trips rented on day 1, back on day 3.
        let trips = records(&dir, "trips.csv");
        assert_eq!(trips.len(), 2);
        for t in &trips {
            assert_eq!(&t[2], "2024-01-01");
            assert_eq!(&t[3], "2024-01-03");
            assert_eq!(&t[4], "idle");
        }
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn open(dir: &TempDir) -> rusqlite::Connection {
        rusqlite::Connection::open(dir.path().join("output.db")).unwrap()
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_trip_count_and_null_end() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_trips(&[
            trip_row(1, Some(day(5)), AssetState::Idle),
            trip_row(2, None, AssetState::Lost),
        ])
        .unwrap();
        w.finish().unwrap();

        let conn = open(&dir);
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM trips", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let (end, state): (Option<String>, String) = conn
            .query_row("SELECT \"end\", state FROM trips WHERE trip_id = 2", [], |r| {
                Ok((r.get(0)?, r.get(1)?))
            })
            .unwrap();
        assert_eq!(end, None);
        assert_eq!(state, "lost");
    }

    #[test]
    fn sqlite_census_row() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_census(&census_row(7)).unwrap();
        w.finish().unwrap();

        let (idle, in_use, lost): (i64, i64, i64) = open(&dir)
            .query_row(
                "SELECT idle, in_use, lost FROM daily_reports WHERE date = '2024-01-07'",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!((idle, in_use, lost), (7, 2, 1));
    }

    #[test]
    fn sqlite_assets() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_assets(&[asset_row(1), asset_row(2), asset_row(3)]).unwrap();
        w.finish().unwrap();

        let count: i64 = open(&dir)
            .query_row("SELECT COUNT(*) FROM assets WHERE state = 'idle'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }
}

// ── Parquet tests ─────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parquet"))]
mod parquet_tests {
    use arrow::array::{Array, Date32Array};
    use arrow::datatypes::DataType;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    use super::*;
    use crate::parquet::ParquetWriter;
    use crate::writer::OutputWriter;

    fn read(dir: &TempDir, file: &str) -> ParquetRecordBatchReaderBuilder<std::fs::File> {
        let file = std::fs::File::open(dir.path().join(file)).unwrap();
        ParquetRecordBatchReaderBuilder::try_new(file).unwrap()
    }

    #[test]
    fn parquet_files_created() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert!(dir.path().join("trips.parquet").exists());
        assert!(dir.path().join("daily_reports.parquet").exists());
        assert!(dir.path().join("assets.parquet").exists());
    }

    #[test]
    fn parquet_trip_dates() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_trips(&[
            trip_row(1, Some(day(2)), AssetState::Idle),
            trip_row(2, None, AssetState::InUse),
        ])
        .unwrap();
        w.finish().unwrap();

        let builder = read(&dir, "trips.parquet");
        let schema = builder.schema().clone();
        assert_eq!(*schema.field_with_name("start").unwrap().data_type(), DataType::Date32);
        assert!(schema.field_with_name("end").unwrap().is_nullable());

        let batches: Vec<_> = builder.build().unwrap().map(|b| b.unwrap()).collect();
        assert_eq!(batches.iter().map(|b| b.num_rows()).sum::<usize>(), 2);

        let ends = batches[0]
            .column_by_name("end")
            .unwrap()
            .as_any()
            .downcast_ref::<Date32Array>()
            .unwrap();
        // 2024-01-02 is 19_724 days after the Unix epoch.
        assert_eq!(ends.value(0), 19_724);
        assert!(ends.is_null(1));
    }

    #[test]
    fn parquet_census_rows() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        for d in 1..=3 {
            w.write_census(&census_row(d)).unwrap();
        }
        w.write_assets(&[asset_row(1)]).unwrap();
        w.finish().unwrap();

        let rows: usize = read(&dir, "daily_reports.parquet")
            .build()
            .unwrap()
            .map(|b| b.unwrap().num_rows())
            .sum();
        assert_eq!(rows, 3);

        let fields: Vec<String> = read(&dir, "assets.parquet")
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect();
        assert_eq!(fields, ["asset_id", "created_at", "state"]);
    }

    #[test]
    fn parquet_finish_required() {
        // A writer dropped without finish() leaves no footer.
        let dir = tmp();
        {
            let mut w = ParquetWriter::new(dir.path()).unwrap();
            w.write_assets(&[asset_row(1)]).unwrap();
        }

        let file = std::fs::File::open(dir.path().join("assets.parquet")).unwrap();
        let result = ParquetRecordBatchReaderBuilder::try_new(file);
        assert!(result.is_err(), "file without Parquet footer should fail to open");
    }
}
