//! Exact fixed residence time.

use std::collections::BTreeMap;

use crt_core::{AssetId, SimRng};

use crate::{PolicyError, PolicyResult, SelectionPolicy};

/// Each member's countdown starts at `delay`; a draw returns the members
/// whose countdown is exactly zero and then decrements every countdown.
///
/// **Ignores the draw budget.**  A member reported due on one draw and not
/// egressed is never reported again.
#[derive(Debug)]
pub struct ConstantDelay {
    delay:      u32,
    countdowns: BTreeMap<AssetId, i64>,
}

impl ConstantDelay {
    pub const NAME: &'static str = "constant_delay";

    pub fn new(delay: u32) -> Self {
        Self { delay, countdowns: BTreeMap::new() }
    }

    pub fn countdown(&self, id: AssetId) -> Option<i64> {
        self.countdowns.get(&id).copied()
    }
}

impl SelectionPolicy for ConstantDelay {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn ingress(&mut self, id: AssetId, _rng: &mut SimRng) -> PolicyResult<()> {
        if self.countdowns.contains_key(&id) {
            return Err(PolicyError::AlreadyMember { policy: Self::NAME, id });
        }
        self.countdowns.insert(id, i64::from(self.delay));
        Ok(())
    }

    /// Legal once a draw has reported the member (countdown passed zero).
    fn egress(&mut self, id: AssetId) -> PolicyResult<()> {
        let steps = self
            .countdown(id)
            .ok_or(PolicyError::NotMember { policy: Self::NAME, id })?;
        if steps >= 0 {
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
            .filter(|&(_, &steps)| steps == 0)
            .map(|(&id, _)| id)
            .collect();
        for steps in self.countdowns.values_mut() {
            *steps -= 1;
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
