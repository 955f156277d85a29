//! Daily demand input.
//!
//! A `DemandSeries` is an ordered sequence of `(date, demand)` pairs, one per
//! simulated day.  Dates must be strictly increasing; the series is
//! validated once at construction so the tick loop can iterate it blindly.

use chrono::NaiveDate;

use crate::{CrtError, CrtResult};

/// Validated, strictly date-ordered demand series.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemandSeries {
    entries: Vec<(NaiveDate, u32)>,
}

impl DemandSeries {
    /// Build a series, rejecting any date that does not come strictly after
    /// its predecessor.
    pub fn new(entries: Vec<(NaiveDate, u32)>) -> CrtResult<Self> {
        for (index, pair) in entries.windows(2).enumerate() {
            let (previous, date) = (pair[0].0, pair[1].0);
            if date <= previous {
                return Err(CrtError::NonMonotonicDemand {
                    index: index + 1,
                    previous,
                    date,
                });
            }
        }
        Ok(Self { entries })
    }

    /// One entry per day starting at `start`.
    pub fn daily(start: NaiveDate, values: impl IntoIterator<Item = u32>) -> CrtResult<Self> {
        let mut date = start;
        let mut entries = Vec::new();
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                date = date.succ_opt().ok_or(CrtError::DateOverflow(date))?;
            }
            entries.push((date, value));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.entries.first().map(|&(d, _)| d)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.entries.last().map(|&(d, _)| d)
    }

    /// `true` when every entry is exactly one day after the previous one.
    pub fn is_contiguous(&self) -> bool {
        self.entries
            .windows(2)
            .all(|p| p[0].0.succ_opt() == Some(p[1].0))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.entries.iter().copied()
    }
}
