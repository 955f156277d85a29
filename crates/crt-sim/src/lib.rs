//! `crt-sim` — daily step orchestrator for the crate-pool simulator.
//!
//! # Daily step
//!
//! ```text
//! for (date, demand) in series:
//!   ① Select      each state's policy reports its due members
//!                 (demand is the draw budget; some policies ignore it)
//!   ② Lose        in-use assets are lost with probability daily_loss_rate
//!                 (remove → force_loss → ingress into lost)
//!   ③ Transition  remaining due assets: egress → advance → ingress
//!   ④ Replenish   Poisson(replenishment_rate) new idle assets
//!   ⑤ Advance     date += 1 day
//!   ⑥ Census      count per state, in order idle, in_use, lost
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use crt_sim::{NoopObserver, PoolBuilder, PoolConfig};
//!
//! let config = PoolConfig::from_shrinkage(2_000, 100.0, 0.15, 1.0, start)?;
//! let mut pool = PoolBuilder::new(config).build()?;
//! let daily = pool.run(&demand, &mut NoopObserver)?;
//! let trips = pool.trips().dump();
//! ```

pub mod builder;
pub mod census;
pub mod config;
pub mod error;
pub mod observer;
pub mod pool;


pub use builder::PoolBuilder;
pub use census::Census;
pub use config::{daily_loss_rate, PoolConfig, DEFAULT_IDLE_DELAY, DEFAULT_SEED};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use pool::Pool;
