//! Errors raised while persisting trips, censuses and assets.
//!
//! Writers return these directly; [`SimOutputObserver`][crate::SimOutputObserver]
//! keeps only the first one, since observer hooks cannot fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Creating an output file or directory failed.
    #[error("output file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Building a record batch failed (schema and column mismatch).
    #[cfg(feature = "parquet")]
    #[error("Arrow batch error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

pub type OutputResult<T> = Result<T, OutputError>;
