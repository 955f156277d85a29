//! Memoryless per-day selection.

use rustc_hash::FxHashSet;

use crt_core::{AssetId, SimRng};

use crate::{PolicyError, PolicyResult, SelectionPolicy};

/// Every draw flips an independent coin per member; members come up due
/// with probability `rate`, so residence time is geometric with mean
/// `1 / rate` days.
///
/// **Ignores the draw budget.**
#[derive(Debug)]
pub struct Poisson {
    rate:    f64,
    order:   Vec<AssetId>,
    members: FxHashSet<AssetId>,
}

impl Poisson {
    pub const NAME: &'static str = "poisson";

    pub fn new(rate: f64) -> PolicyResult<Self> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(PolicyError::InvalidParameter {
                policy: Self::NAME,
                reason: format!("rate must be a probability in [0, 1], got {rate}"),
            });
        }
        Ok(Self { rate, order: Vec::new(), members: FxHashSet::default() })
    }

    fn take(&mut self, id: AssetId) -> PolicyResult<()> {
        if !self.members.remove(&id) {
            return Err(PolicyError::NotMember { policy: Self::NAME, id });
        }
        self.order.retain(|&m| m != id);
        Ok(())
    }
}

impl SelectionPolicy for Poisson {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn ingress(&mut self, id: AssetId, _rng: &mut SimRng) -> PolicyResult<()> {
        if !self.members.insert(id) {
            return Err(PolicyError::AlreadyMember { policy: Self::NAME, id });
        }
        self.order.push(id);
        Ok(())
    }

    fn egress(&mut self, id: AssetId) -> PolicyResult<()> {
        self.take(id)
    }

    fn remove(&mut self, id: AssetId) -> PolicyResult<()> {
        self.take(id)
    }

    fn draw(&mut self, _budget: usize, rng: &mut SimRng) -> Vec<AssetId> {
        let rate = self.rate;
        self.order
            .iter()
            .copied()
            .filter(|_| rng.gen_bool(rate))
            .collect()
    }

    fn contains(&self, id: AssetId) -> bool {
        self.members.contains(&id)
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn members(&self) -> Vec<AssetId> {
        self.order.clone()
    }
}
