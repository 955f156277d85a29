//! First-in-first-out selection after a fixed delay.
//!
//! # Bucket layout
//!
//! ```text
//!   bucket:   0 (due)   1   2   …   delay (new arrivals)
//!   ingress ───────────────────────────────►  push
//!   draw    ◄─ take ≤ budget from 0, then shift 1..=delay one step left,
//!              appending bucket 1 to whatever is still waiting in 0
//! ```
//!
//! Members that are due but not drawn (budget exhausted) stay at the front of
//! bucket 0 and keep their priority on the next draw.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crt_core::{AssetId, SimRng};

use crate::{PolicyError, PolicyResult, SelectionPolicy};

/// FIFO queue whose members become drawable `delay` draws after ingress.
///
/// Every call to `draw` ages the queue by one step, including calls with a
/// zero budget.  `delay = 0` degenerates to a plain FIFO.
#[derive(Debug)]
pub struct DelayedFifo {
    delay:   usize,
    buckets: VecDeque<Vec<AssetId>>,
    members: FxHashSet<AssetId>,
}

impl DelayedFifo {
    pub const NAME: &'static str = "delayed_fifo";

    pub fn new(delay: usize) -> Self {
        Self {
            delay,
            buckets: (0..=delay).map(|_| Vec::new()).collect(),
            members: FxHashSet::default(),
        }
    }

    pub fn delay(&self) -> usize {
        self.delay
    }

    /// Members currently in bucket `k` (0 = due), in arrival order.
    ///
    /// # Panics
    /// Panics if `k > delay`.
    pub fn bucket(&self, k: usize) -> &[AssetId] {
        &self.buckets[k]
    }

    fn age(&mut self) {
        if self.delay == 0 {
            return;
        }
        let next = self.buckets.remove(1).unwrap_or_default();
        self.buckets[0].extend(next);
        self.buckets.push_back(Vec::new());
    }
}

impl SelectionPolicy for DelayedFifo {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn ingress(&mut self, id: AssetId, _rng: &mut SimRng) -> PolicyResult<()> {
        if !self.members.insert(id) {
            return Err(PolicyError::AlreadyMember { policy: Self::NAME, id });
        }
        self.buckets[self.delay].push(id);
        Ok(())
    }

    /// Only bucket-0 members may egress.
    fn egress(&mut self, id: AssetId) -> PolicyResult<()> {
        let due = &mut self.buckets[0];
        match due.iter().position(|&m| m == id) {
            Some(pos) => {
                due.remove(pos);
                self.members.remove(&id);
                Ok(())
            }
            None if self.members.contains(&id) => {
                Err(PolicyError::NotDue { policy: Self::NAME, id })
            }
            None => Err(PolicyError::NotMember { policy: Self::NAME, id }),
        }
    }

    fn remove(&mut self, id: AssetId) -> PolicyResult<()> {
        if !self.members.remove(&id) {
            return Err(PolicyError::NotMember { policy: Self::NAME, id });
        }
        for bucket in self.buckets.iter_mut() {
            if let Some(pos) = bucket.iter().position(|&m| m == id) {
                bucket.remove(pos);
                break;
            }
        }
        Ok(())
    }

    fn draw(&mut self, budget: usize, _rng: &mut SimRng) -> Vec<AssetId> {
        let due = &self.buckets[0];
        let drawn = due[..budget.min(due.len())].to_vec();
        self.age();
        drawn
    }

    fn contains(&self, id: AssetId) -> bool {
        self.members.contains(&id)
    }

    fn len(&self) -> usize {
        self.members.len()
    }

    fn members(&self) -> Vec<AssetId> {
        self.buckets.iter().flatten().copied().collect()
    }
}
