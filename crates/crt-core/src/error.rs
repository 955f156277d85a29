//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CrtError` as one
//! variant via `#[from]`.

use chrono::NaiveDate;
use thiserror::Error;

/// The top-level error type for `crt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CrtError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("demand date {date} at index {index} does not follow {previous}")]
    NonMonotonicDemand {
        index:    usize,
        previous: NaiveDate,
        date:     NaiveDate,
    },

    #[error("calendar overflow advancing past {0}")]
    DateOverflow(NaiveDate),
}

/// Shorthand result type for all `crt-*` crates.
pub type CrtResult<T> = Result<T, CrtError>;
