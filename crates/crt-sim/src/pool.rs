//! The `Pool` struct and its daily step.

use log::{debug, info, trace, warn};
use rustc_hash::FxHashSet;

use crt_asset::{Asset, AssetState, TripLog};
use crt_core::{AssetId, CrtError, DemandSeries, IdCounter, NaiveDate, SimClock, SimRng, Tick};
use crt_policy::SelectionPolicy;

use crate::{Census, PoolConfig, SimError, SimObserver, SimResult};

// ── Pool ──────────────────────────────────────────────────────────────────────

/// The simulation runner: every asset, one selection policy per state, the
/// trip log and the calendar.
///
/// Each call to [`proceed`][Self::proceed] simulates one day:
///
/// 1. **Select**: ask each state's policy which members are due, passing
///    the day's demand as the draw budget (idle, in_use, lost order).
/// 2. **Lose**: each in-use asset is lost with probability
///    `daily_loss_rate`; it is removed from the in-use policy regardless of
///    due-ness and goes straight to the lost policy, skipping step 3.
/// 3. **Transition**: every other asset whose id was drawn for its current
///    state egresses, advances, and ingresses into its new state's policy.
/// 4. **Replenish**: `Poisson(replenishment_rate)` new idle assets join.
/// 5. **Advance** the date by one day.
/// 6. **Census**: count assets per state.
///
/// Assets are visited in creation order and all randomness comes from one
/// `SimRng`, so a run is fully determined by its seed.
///
/// Any bookkeeping error aborts the step and poisons the pool: later calls
/// return [`SimError::Poisoned`].
///
/// Create via [`PoolBuilder`][crate::PoolBuilder].
pub struct Pool {
    config:    PoolConfig,
    clock:     SimClock,
    rng:       SimRng,
    assets:    Vec<Asset>,
    asset_ids: IdCounter<AssetId>,
    /// Indexed by `AssetState::index()`.
    policies:  [Box<dyn SelectionPolicy>; 3],
    trips:     TripLog,
    poisoned:  bool,
}

impl Pool {
    pub(crate) fn empty(
        config:   PoolConfig,
        policies: [Box<dyn SelectionPolicy>; 3],
        trips:    TripLog,
    ) -> Self {
        Self {
            clock: SimClock::new(config.start_date),
            rng: SimRng::new(config.seed),
            assets: Vec::with_capacity(config.population),
            asset_ids: IdCounter::new(),
            policies,
            trips,
            poisoned: false,
            config,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Simulate one day with the given demand and return the census.
    pub fn proceed(&mut self, demand: u32) -> SimResult<Census> {
        if self.poisoned {
            warn!("proceed called on a poisoned pool at {}", self.clock);
            return Err(SimError::Poisoned);
        }
        let result = self.step(demand);
        if result.is_err() {
            self.poisoned = true;
        }
        result
    }

    /// Run one day per entry of `demand`, calling observer hooks around each
    /// day, and return the daily censuses.
    ///
    /// The series must start on the pool's current date and advance exactly
    /// one day per entry.
    pub fn run<O: SimObserver>(
        &mut self,
        demand:   &DemandSeries,
        observer: &mut O,
    ) -> SimResult<Vec<Census>> {
        let mut expected = self.date();
        for (found, _) in demand.iter() {
            if found != expected {
                return Err(SimError::DemandMisaligned { expected, found });
            }
            expected = expected.succ_opt().ok_or(CrtError::DateOverflow(expected))?;
        }

        let mut reports = Vec::with_capacity(demand.len());
        for (date, value) in demand.iter() {
            observer.on_tick_start(date);
            let census = self.proceed(value)?;
            observer.on_tick_end(date, &census);
            reports.push(census);
        }

        info!(
            "run finished at {}: {} assets, {} trips, {}",
            self.clock,
            self.assets.len(),
            self.trips.len(),
            self.report()
        );
        observer.on_sim_end(self.date(), &self.trips, &self.assets);
        Ok(reports)
    }

    /// Current census without stepping.
    pub fn report(&self) -> Census {
        Census::count(&self.assets)
    }

    /// The date the next call to `proceed` will simulate.
    pub fn date(&self) -> NaiveDate {
        self.clock.current_date()
    }

    /// Days simulated so far.
    pub fn tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Every asset ever created, in creation order.
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Current state of every asset, in creation order.
    pub fn asset_states(&self) -> Vec<(AssetId, AssetState)> {
        self.assets.iter().map(|a| (a.id, a.state())).collect()
    }

    pub fn trips(&self) -> &TripLog {
        &self.trips
    }

    pub fn into_trip_log(self) -> TripLog {
        self.trips
    }

    pub fn policy(&self, state: AssetState) -> &dyn SelectionPolicy {
        self.policies[state.index()].as_ref()
    }

    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Check that every asset is a member of exactly its own state's policy
    /// and that policies hold nobody else.
    pub fn verify_membership(&self) -> SimResult<()> {
        for asset in &self.assets {
            for state in AssetState::ALL {
                let member = self.policies[state.index()].contains(asset.id);
                if member != (state == asset.state()) {
                    return Err(SimError::Inconsistent(format!(
                        "{} is {} but {} membership in the {state} policy is {member}",
                        asset.id,
                        asset.state(),
                        self.policies[state.index()].name(),
                    )));
                }
            }
        }
        let members: usize = self.policies.iter().map(|p| p.len()).sum();
        if members != self.assets.len() {
            return Err(SimError::Inconsistent(format!(
                "policies hold {members} members for {} assets",
                self.assets.len()
            )));
        }
        Ok(())
    }

    // ── Daily step ────────────────────────────────────────────────────────

    fn step(&mut self, demand: u32) -> SimResult<Census> {
        let today = self.clock.current_date();
        let budget = demand as usize;

        // ① Select
        let mut due: [FxHashSet<AssetId>; 3] = Default::default();
        for state in AssetState::ALL {
            due[state.index()] = self.policies[state.index()]
                .draw(budget, &mut self.rng)
                .into_iter()
                .collect();
        }

        // ② Lose / ③ Transition
        let in_use = AssetState::InUse.index();
        let lost = AssetState::Lost.index();
        let mut lost_today = 0usize;
        let mut moved = 0usize;

        for asset in self.assets.iter_mut() {
            let state = asset.state();

            if state == AssetState::InUse && self.rng.gen_bool(self.config.daily_loss_rate) {
                self.policies[in_use].remove(asset.id)?;
                asset.force_loss(today, &mut self.trips)?;
                self.policies[lost].ingress(asset.id, &mut self.rng)?;
                trace!("{today}: {} lost", asset.id);
                lost_today += 1;
                continue;
            }

            if due[state.index()].contains(&asset.id) {
                self.policies[state.index()].egress(asset.id)?;
                asset.advance(today, &mut self.trips)?;
                self.policies[asset.state().index()].ingress(asset.id, &mut self.rng)?;
                moved += 1;
            }
        }

        // ④ Replenish
        let arrivals = self.rng.poisson(self.config.replenishment_rate);
        for _ in 0..arrivals {
            self.add_asset(today)?;
        }

        // ⑤ Advance
        self.clock.advance()?;

        // ⑥ Census
        let census = self.report();
        debug!(
            "{today}: demand={demand} moved={moved} lost={lost_today} new={arrivals} → {census}"
        );
        Ok(census)
    }

    /// Create a new idle asset dated `created_at` and enrol it in the idle
    /// policy.
    pub(crate) fn add_asset(&mut self, created_at: NaiveDate) -> SimResult<AssetId> {
        let id = self.asset_ids.next_id();
        self.policies[AssetState::Idle.index()].ingress(id, &mut self.rng)?;
        self.assets.push(Asset::new(id, created_at));
        Ok(id)
    }
}
