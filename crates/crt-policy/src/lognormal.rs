//! Random residence time drawn per member at ingress.

use std::collections::BTreeMap;

use crt_core::{AssetId, SimRng};

use crate::{PolicyError, PolicyResult, SelectionPolicy};

/// Each member gets a fractional countdown at ingress; a member is due once
/// its countdown drops below zero.
///
/// The countdown is the logarithm of a `LogNormal(mean, std)` variate, i.e.
/// a normal draw centred on `mean` days.  It is sampled in log space
/// directly so large means cannot overflow `exp`.
///
/// **Ignores the draw budget.** Every draw returns all expired members and
/// then decrements every countdown by one.
#[derive(Debug)]
pub struct LogNormal {
    mean:       f64,
    std:        f64,
    countdowns: BTreeMap<AssetId, f64>,
}

impl LogNormal {
    pub const NAME: &'static str = "log_normal";

    pub fn new(mean: f64, std: f64) -> PolicyResult<Self> {
        if !mean.is_finite() {
            return Err(PolicyError::InvalidParameter {
                policy: Self::NAME,
                reason: format!("mean must be finite, got {mean}"),
            });
        }
        if !std.is_finite() || std < 0.0 {
            return Err(PolicyError::InvalidParameter {
                policy: Self::NAME,
                reason: format!("std must be finite and non-negative, got {std}"),
            });
        }
        Ok(Self { mean, std, countdowns: BTreeMap::new() })
    }

    /// Remaining countdown for `id`, if it is a member.
    pub fn countdown(&self, id: AssetId) -> Option<f64> {
        self.countdowns.get(&id).copied()
    }
}

impl SelectionPolicy for LogNormal {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn ingress(&mut self, id: AssetId, rng: &mut SimRng) -> PolicyResult<()> {
        if self.countdowns.contains_key(&id) {
            return Err(PolicyError::AlreadyMember { policy: Self::NAME, id });
        }
        let steps = rng.normal(self.mean, self.std);
        self.countdowns.insert(id, steps);
        Ok(())
    }

    fn egress(&mut self, id: AssetId) -> PolicyResult<()> {
        let steps = self
            .countdown(id)
            .ok_or(PolicyError::NotMember { policy: Self::NAME, id })?;
        if steps >= 0.0 {
            return Err(PolicyError::NotDue { policy: Self::NAME, id });
        }
        self.countdowns.remove(&id);
        Ok(())
    }

    fn remove(&mut self, id: AssetId) -> PolicyResult<()> {
        self.countdowns
            .remove(&id)
            .map(|_| ())
            .ok_or(PolicyError::NotMember { policy: Self::NAME, id })
    }

    fn draw(&mut self, _budget: usize, _rng: &mut SimRng) -> Vec<AssetId> {
        let drawn = self
            .countdowns
            .iter()
            .filter(|&(_, &steps)| steps < 0.0)
            .map(|(&id, _)| id)
            .collect();
        for steps in self.countdowns.values_mut() {
            *steps -= 1.0;
        }
        drawn
    }

    fn contains(&self, id: AssetId) -> bool {
        self.countdowns.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.countdowns.len()
    }

    fn members(&self) -> Vec<AssetId> {
        self.countdowns.keys().copied().collect()
    }
}
