//! Trip records and the append-only trip log.
//!
//! A trip is one `idle → in_use → (idle | lost)` cycle of a single asset.
//! Its history is an ordered list of `(state, date)` entries:
//!
//! - the first entry is always `(in_use, start_date)`;
//! - a trip is closed by exactly one `(idle, end)` or `(lost, date)` entry;
//! - nothing is appended after the closing entry.
//!
//! The [`TripLog`] owns every trip for the lifetime of a run and owns the
//! trip id counter.

use std::fmt;

use crt_core::{AssetId, IdCounter, NaiveDate, TripId};

use crate::{AssetError, AssetResult, AssetState};

// ── Trip ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trip {
    pub id:         TripId,
    /// Back-reference to the asset that made the trip.
    pub asset_id:   AssetId,
    pub created_at: NaiveDate,
    states:         Vec<(AssetState, NaiveDate)>,
}

impl Trip {
    fn open(id: TripId, asset_id: AssetId, day: NaiveDate) -> Self {
        Self {
            id,
            asset_id,
            created_at: day,
            states: vec![(AssetState::InUse, day)],
        }
    }

    /// Full history, oldest first.  Never empty.
    pub fn states(&self) -> &[(AssetState, NaiveDate)] {
        &self.states
    }

    pub fn start_date(&self) -> NaiveDate {
        self.states[0].1
    }

    /// Label of the latest entry: `in_use` while open, else how it ended.
    pub fn current_state(&self) -> AssetState {
        self.last().0
    }

    /// Date the asset came back, or `None` if it is still out or was lost.
    pub fn end_date(&self) -> Option<NaiveDate> {
        match self.last() {
            (AssetState::Idle, day) => Some(day),
            _ => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.current_state() != AssetState::InUse
    }

    fn last(&self) -> (AssetState, NaiveDate) {
        self.states[self.states.len() - 1]
    }
}

// ── TripReport ────────────────────────────────────────────────────────────────

/// One row of the tabular trip dump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripReport {
    pub trip_id:  TripId,
    pub asset_id: AssetId,
    /// Date of the first entry.
    pub start:    NaiveDate,
    /// Date of the last entry when the trip ended back at the depot.
    pub end:      Option<NaiveDate>,
    /// Label of the last entry.
    pub state:    AssetState,
}

impl From<&Trip> for TripReport {
    fn from(trip: &Trip) -> Self {
        Self {
            trip_id:  trip.id,
            asset_id: trip.asset_id,
            start:    trip.start_date(),
            end:      trip.end_date(),
            state:    trip.current_state(),
        }
    }
}

// ── RunSummary ────────────────────────────────────────────────────────────────

/// Aggregate statistics over a trip log.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub total_trips:    usize,
    /// Trips that ended in loss.
    pub lost:           usize,
    /// Trips still open.
    pub in_use:         usize,
    /// Trips that ended back at the depot.
    pub completed:      usize,
    /// Mean `end - start` over completed trips, in days.
    pub mean_trip_days: Option<f64>,
    /// `lost / total_trips`; 0 for an empty log.
    pub shrinkage:      f64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total trips generated : {}", self.total_trips)?;
        writeln!(f, "Trips lost            : {}", self.lost)?;
        writeln!(f, "Trips still in use    : {}", self.in_use)?;
        writeln!(f, "Trips completed       : {}", self.completed)?;
        match self.mean_trip_days {
            Some(d) => writeln!(f, "Average trip length   : {d:.2} days")?,
            None    => writeln!(f, "Average trip length   : n/a")?,
        }
        write!(f, "Shrinkage rate        : {:.2}%", self.shrinkage * 100.0)
    }
}

// ── TripLog ───────────────────────────────────────────────────────────────────

/// Append-only registry of every trip in a run.
///
/// Trip ids are issued sequentially from 1 by the log itself, so lookup is a
/// direct index.
#[derive(Clone, Debug, Default)]
pub struct TripLog {
    trips:   Vec<Trip>,
    counter: IdCounter<TripId>,
}

impl TripLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new trip for `asset` on `day` and return its id.
    pub fn open(&mut self, asset: AssetId, day: NaiveDate) -> TripId {
        let id = self.counter.next_id();
        self.trips.push(Trip::open(id, asset, day));
        id
    }

    /// Close an open trip with an `idle` or `lost` entry.
    pub fn append(&mut self, id: TripId, state: AssetState, day: NaiveDate) -> AssetResult<()> {
        if state == AssetState::InUse {
            return Err(AssetError::TripEntry { trip: id, state });
        }
        let trip = self.get_mut(id).ok_or(AssetError::UnknownTrip(id))?;
        if trip.is_closed() {
            return Err(AssetError::TripClosed(id));
        }
        trip.states.push((state, day));
        Ok(())
    }

    pub fn get(&self, id: TripId) -> Option<&Trip> {
        let index = (id.get() as usize).checked_sub(1)?;
        self.trips.get(index)
    }

    fn get_mut(&mut self, id: TripId) -> Option<&mut Trip> {
        let index = (id.get() as usize).checked_sub(1)?;
        self.trips.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// All trips in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Trip> {
        self.trips.iter()
    }

    /// Tabular dump: one report per trip, in id order.
    pub fn dump(&self) -> Vec<TripReport> {
        self.trips.iter().map(TripReport::from).collect()
    }

    pub fn summary(&self) -> RunSummary {
        let mut lost = 0;
        let mut in_use = 0;
        let mut completed = 0;
        let mut total_days = 0i64;

        for trip in &self.trips {
            match trip.current_state() {
                AssetState::Lost  => lost += 1,
                AssetState::InUse => in_use += 1,
                AssetState::Idle  => {
                    completed += 1;
                    if let Some(end) = trip.end_date() {
                        total_days += (end - trip.start_date()).num_days();
                    }
                }
            }
        }

        let total_trips = self.trips.len();
        RunSummary {
            total_trips,
            lost,
            in_use,
            completed,
            mean_trip_days: (completed > 0).then(|| total_days as f64 / completed as f64),
            shrinkage: if total_trips == 0 { 0.0 } else { lost as f64 / total_trips as f64 },
        }
    }
}
