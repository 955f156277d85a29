//! Immediate uniform-random selection.

use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;

use crt_core::{AssetId, SimRng};

use crate::{PolicyError, PolicyResult, SelectionPolicy};

/// Draws up to `budget` members uniformly at random, without replacement,
/// irrespective of the order they arrived in.
///
/// Members live in a `Vec` (deterministic order for a given seed) with a
/// position index for O(1) removal.
#[derive(Debug, Default)]
pub struct Scrambling {
    members:  Vec<AssetId>,
    position: FxHashMap<AssetId, usize>,
}

impl Scrambling {
    pub const NAME: &'static str = "scrambling";

    pub fn new() -> Self {
        Self::default()
    }

    fn take(&mut self, id: AssetId) -> PolicyResult<()> {
        let pos = self
            .position
            .remove(&id)
            .ok_or(PolicyError::NotMember { policy: Self::NAME, id })?;
        self.members.swap_remove(pos);
        if let Some(&moved) = self.members.get(pos) {
            self.position.insert(moved, pos);
        }
        Ok(())
    }
}

impl SelectionPolicy for Scrambling {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn ingress(&mut self, id: AssetId, _rng: &mut SimRng) -> PolicyResult<()> {
        if self.position.contains_key(&id) {
            return Err(PolicyError::AlreadyMember { policy: Self::NAME, id });
        }
        self.position.insert(id, self.members.len());
        self.members.push(id);
        Ok(())
    }

    fn egress(&mut self, id: AssetId) -> PolicyResult<()> {
        self.take(id)
    }

    fn remove(&mut self, id: AssetId) -> PolicyResult<()> {
        self.take(id)
    }

    fn draw(&mut self, budget: usize, rng: &mut SimRng) -> Vec<AssetId> {
        if budget >= self.members.len() {
            return self.members.clone();
        }
        self.members
            .choose_multiple(rng.inner(), budget)
            .copied()
            .collect()
    }

    fn contains(&self, id: AssetId) -> bool {
        self.position.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.members.len()
    }

    fn members(&self) -> Vec<AssetId> {
        self.members.clone()
    }
}
