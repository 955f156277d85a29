//! Simulation observer trait for progress reporting and data collection.

use crt_asset::{Asset, TripLog};
use crt_core::NaiveDate;

use crate::Census;

/// Callbacks invoked by [`Pool::run`][crate::Pool::run] at key points in the
/// daily loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, date: NaiveDate, census: &Census) {
///         println!("{date}: {census}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a day is processed.
    fn on_tick_start(&mut self, _date: NaiveDate) {}

    /// Called after a day is processed with that day's census.  `date` is the
    /// day that was simulated, not the (already advanced) pool date.
    fn on_tick_end(&mut self, _date: NaiveDate, _census: &Census) {}

    /// Called once after the last day, with read access to the final trip
    /// log and asset population.
    fn on_sim_end(&mut self, _final_date: NaiveDate, _trips: &TripLog, _assets: &[Asset]) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
