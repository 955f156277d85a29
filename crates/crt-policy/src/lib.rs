//! `crt-policy` — per-state selection policies.
//!
//! A selection policy owns the membership of one asset state and decides,
//! once per simulated day, which members are due to leave.  Separating
//! "who is due" from "how the asset transitions" lets every state use its
//! own dwell-time rule without touching the state machine or the pool.
//!
//! | Variant          | Membership                | Due when                               |
//! |------------------|---------------------------|----------------------------------------|
//! | [`Scrambling`]   | vec + position index      | uniformly sampled, ≤ budget            |
//! | [`Lifo`]         | stack                     | top ≤ budget entries                   |
//! | [`DelayedFifo`]  | `delay + 1` buckets       | in bucket 0, ≤ budget, oldest first    |
//! | [`LogNormal`]    | per-id `f64` countdown    | countdown `< 0`                        |
//! | [`ConstantDelay`]| per-id integer countdown  | countdown `== 0`                       |
//! | [`Poisson`]      | vec                       | independent coin flip with `rate`      |
//! | [`Sink`]         | set                       | never                                  |
//!
//! See [`SelectionPolicy`] for which variants honour the draw budget.

pub mod constant;
pub mod error;
pub mod fifo;
pub mod kind;
pub mod lifo;
pub mod lognormal;
pub mod poisson;
pub mod policy;
pub mod scrambling;
pub mod sink;


pub use constant::ConstantDelay;
pub use error::{PolicyError, PolicyResult};
pub use fifo::DelayedFifo;
pub use kind::PolicyKind;
pub use lifo::Lifo;
pub use lognormal::LogNormal;
pub use poisson::Poisson;
pub use policy::SelectionPolicy;
pub use scrambling::Scrambling;
pub use sink::Sink;
