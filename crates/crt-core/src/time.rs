//! Simulation time model.
//!
//! # Design
//!
//! Time advances in fixed one-day ticks.  The canonical counter is `Tick`;
//! `SimClock` maps it onto the calendar:
//!
//!   current_date = start_date + tick days
//!
//! The clock tracks the current date incrementally so advancing is O(1) and
//! never re-derives dates from the start.

use std::fmt;

use chrono::NaiveDate;

use crate::{CrtError, CrtResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of simulated days elapsed since the start date.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Daily simulation clock.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Calendar date of tick 0.
    pub start_date: NaiveDate,
    /// The current tick, advanced by `SimClock::advance()` each day.
    pub current_tick: Tick,
    current_date: NaiveDate,
}

impl SimClock {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            current_tick: Tick::ZERO,
            current_date: start_date,
        }
    }

    /// Advance the clock by one day.
    pub fn advance(&mut self) -> CrtResult<()> {
        let next = self
            .current_date
            .succ_opt()
            .ok_or(CrtError::DateOverflow(self.current_date))?;
        self.current_date = next;
        self.current_tick = Tick(self.current_tick.0 + 1);
        Ok(())
    }

    /// Calendar date corresponding to `current_tick`.
    #[inline]
    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    /// Whole days elapsed since the start date.
    #[inline]
    pub fn elapsed_days(&self) -> u64 {
        self.current_tick.0
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.current_tick, self.current_date)
    }
}
