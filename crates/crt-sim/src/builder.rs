//! Fluent builder for constructing a [`Pool`].

use log::info;

use crt_asset::{AssetState, TripLog};
use crt_policy::SelectionPolicy;

use crate::{Pool, PoolConfig, SimError, SimResult};

/// Fluent builder for [`Pool`].
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                   |
/// |-------------------------|-------------------------------------------|
/// | `.trip_log(log)`        | A fresh, empty `TripLog`                  |
/// | `.policy(state, p)`     | Built from `config.policy_kind(state)`    |
///
/// # Example
///
/// ```rust,ignore
/// let config = PoolConfig::from_shrinkage(2_000, 100.0, 0.15, 1.0, start)?;
/// let mut pool = PoolBuilder::new(config)
///     .policy(AssetState::InUse, Box::new(Poisson::new(0.01)?))
///     .build()?;
/// let census = pool.proceed(12)?;
/// ```
pub struct PoolBuilder {
    config:    PoolConfig,
    trips:     Option<TripLog>,
    overrides: [Option<Box<dyn SelectionPolicy>>; 3],
}

impl PoolBuilder {
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            trips:     None,
            overrides: [None, None, None],
        }
    }

    /// Record trips into an existing log instead of a fresh one.  Trip ids
    /// continue from the log's own counter.
    pub fn trip_log(mut self, log: TripLog) -> Self {
        self.trips = Some(log);
        self
    }

    /// Use a ready-made policy for `state`, taking precedence over the
    /// configuration.  The policy must be empty.
    pub fn policy(mut self, state: AssetState, policy: Box<dyn SelectionPolicy>) -> Self {
        self.overrides[state.index()] = Some(policy);
        self
    }

    /// Validate the configuration, build one policy per state and create the
    /// initial idle population.
    pub fn build(self) -> SimResult<Pool> {
        let Self { config, trips, mut overrides } = self;
        config.validate()?;

        let mut resolve = |state: AssetState| -> SimResult<Box<dyn SelectionPolicy>> {
            match overrides[state.index()].take() {
                Some(p) if !p.is_empty() => Err(SimError::Config(format!(
                    "{} policy for {state} already has {} members",
                    p.name(),
                    p.len()
                ))),
                Some(p) => Ok(p),
                None => Ok(config.policy_kind(state).build()?),
            }
        };
        let policies = [
            resolve(AssetState::Idle)?,
            resolve(AssetState::InUse)?,
            resolve(AssetState::Lost)?,
        ];

        info!(
            "building pool: {} assets from {}, T={} days, loss={:.6}/day, replenish={}/day, policies [{}, {}, {}]",
            config.population,
            config.start_date,
            config.mean_trip_duration,
            config.daily_loss_rate,
            config.replenishment_rate,
            policies[0].name(),
            policies[1].name(),
            policies[2].name(),
        );

        let mut pool = Pool::empty(config, policies, trips.unwrap_or_default());
        let start = pool.date();
        for _ in 0..pool.config().population {
            pool.add_asset(start)?;
        }
        Ok(pool)
    }
}
