//! `crt-core` — foundational types for the crate-pool simulator.
//!
//! This crate is a dependency of every other `crt-*` crate.  It has no
//! `crt-*` dependencies and few external ones (`rand`, `chrono`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AssetId`, `TripId`, `IdCounter`                      |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`demand`]      | `DemandSeries`                                        |
//! | [`rng`]         | `SimRng` and its distribution helpers                 |
//! | [`error`]       | `CrtError`, `CrtResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, ticks and demand.   |

pub mod demand;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use chrono::NaiveDate;
pub use demand::DemandSeries;
pub use error::{CrtError, CrtResult};
pub use ids::{AssetId, IdCounter, SequentialId, TripId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
