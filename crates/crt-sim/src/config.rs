//! Pool configuration and loss-rate calibration.

use serde::{Deserialize, Serialize};

use crt_asset::AssetState;
use crt_core::NaiveDate;
use crt_policy::PolicyKind;

use crate::{SimError, SimResult};

/// Days an asset waits at the depot before it can be rented again, when no
/// idle policy is configured.
pub const DEFAULT_IDLE_DELAY: usize = 7;

/// Seed used when a configuration file omits one.
pub const DEFAULT_SEED: u64 = 42;

fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Per-day loss probability for an in-use asset that yields an overall
/// shrinkage of roughly `shrinkage` over a trip of `mean_trip_duration`
/// days:
///
///   rate = s / (T · (1 − s))
pub fn daily_loss_rate(shrinkage: f64, mean_trip_duration: f64) -> SimResult<f64> {
    if !(0.0..1.0).contains(&shrinkage) {
        return Err(SimError::Config(format!(
            "shrinkage must be in [0, 1), got {shrinkage}"
        )));
    }
    if !(mean_trip_duration.is_finite() && mean_trip_duration > 0.0) {
        return Err(SimError::Config(format!(
            "mean trip duration must be positive, got {mean_trip_duration}"
        )));
    }
    Ok(shrinkage / (mean_trip_duration * (1.0 - shrinkage)))
}

/// Construction parameters for a [`Pool`][crate::Pool].
///
/// Typically loaded from a JSON file by the application crate:
///
/// ```json
/// {
///   "population": 2000,
///   "mean_trip_duration": 100.0,
///   "daily_loss_rate": 0.0017647,
///   "replenishment_rate": 1.0,
///   "start_date": "2024-01-01",
///   "seed": 7,
///   "idle_policy": { "kind": "delayed_fifo", "delay": 7 }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Initial number of assets, all starting idle.
    pub population: usize,

    /// Mean trip duration `T` in days.  Parameterises the default in-use
    /// policy.
    pub mean_trip_duration: f64,

    /// Probability per day that an in-use asset is lost.
    pub daily_loss_rate: f64,

    /// Mean number of new assets added per day (Poisson).
    pub replenishment_rate: f64,

    /// Calendar date of the first tick.
    pub start_date: NaiveDate,

    /// Master RNG seed.  The same seed always produces identical results.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Defaults to `DelayedFifo { delay: 7 }`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_policy: Option<PolicyKind>,

    /// Defaults to `LogNormal { mean: T, std: T / 2 }`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_use_policy: Option<PolicyKind>,

    /// Defaults to `Sink`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lost_policy: Option<PolicyKind>,
}

impl PoolConfig {
    pub fn new(
        population:         usize,
        mean_trip_duration: f64,
        daily_loss_rate:    f64,
        replenishment_rate: f64,
        start_date:         NaiveDate,
    ) -> Self {
        Self {
            population,
            mean_trip_duration,
            daily_loss_rate,
            replenishment_rate,
            start_date,
            seed: DEFAULT_SEED,
            idle_policy: None,
            in_use_policy: None,
            lost_policy: None,
        }
    }

    /// Like [`new`][Self::new], deriving the daily loss rate from a target
    /// shrinkage fraction with [`daily_loss_rate`].
    pub fn from_shrinkage(
        population:         usize,
        mean_trip_duration: f64,
        shrinkage:          f64,
        replenishment_rate: f64,
        start_date:         NaiveDate,
    ) -> SimResult<Self> {
        let rate = daily_loss_rate(shrinkage, mean_trip_duration)?;
        Ok(Self::new(population, mean_trip_duration, rate, replenishment_rate, start_date))
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_policy(mut self, state: AssetState, kind: PolicyKind) -> Self {
        let slot = match state {
            AssetState::Idle  => &mut self.idle_policy,
            AssetState::InUse => &mut self.in_use_policy,
            AssetState::Lost  => &mut self.lost_policy,
        };
        *slot = Some(kind);
        self
    }

    /// The policy to build for `state`: the configured override, or the
    /// default.
    pub fn policy_kind(&self, state: AssetState) -> PolicyKind {
        let configured = match state {
            AssetState::Idle  => &self.idle_policy,
            AssetState::InUse => &self.in_use_policy,
            AssetState::Lost  => &self.lost_policy,
        };
        configured.clone().unwrap_or_else(|| match state {
            AssetState::Idle  => PolicyKind::DelayedFifo { delay: DEFAULT_IDLE_DELAY },
            AssetState::InUse => PolicyKind::LogNormal {
                mean: self.mean_trip_duration,
                std:  self.mean_trip_duration / 2.0,
            },
            AssetState::Lost  => PolicyKind::Sink,
        })
    }

    /// Reject parameters no run could use.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.mean_trip_duration.is_finite() && self.mean_trip_duration > 0.0) {
            return Err(SimError::Config(format!(
                "mean_trip_duration must be positive, got {}",
                self.mean_trip_duration
            )));
        }
        if !(0.0..=1.0).contains(&self.daily_loss_rate) {
            return Err(SimError::Config(format!(
                "daily_loss_rate must be a probability in [0, 1], got {}",
                self.daily_loss_rate
            )));
        }
        if !(self.replenishment_rate.is_finite() && self.replenishment_rate >= 0.0) {
            return Err(SimError::Config(format!(
                "replenishment_rate must be non-negative, got {}",
                self.replenishment_rate
            )));
        }
        Ok(())
    }
}
