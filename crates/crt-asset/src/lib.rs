//! `crt-asset` — asset state machine and trip records.
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`state`]   | `AssetState`, `Trigger`, transition table                  |
//! | [`asset`]   | `Asset`, `advance` / `force_loss`                         |
//! | [`trip`]    | `Trip`, `TripLog`, `TripReport`, `RunSummary`              |
//! | [`error`]   | `AssetError`, `AssetResult`                                |
//!
//! Assets do not hold a reference to the log.  Whoever drives the state
//! machine passes the [`TripLog`] into each transition, which keeps the log
//! the single owner of trip records.

pub mod asset;
pub mod error;
pub mod state;
pub mod trip;

#[cfg(test)]
mod tests;

pub use asset::Asset;
pub use error::{AssetError, AssetResult};
pub use state::{AssetState, Trigger};
pub use trip::{RunSummary, Trip, TripLog, TripReport};
