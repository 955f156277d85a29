//! Absorbing state.

use rustc_hash::FxHashSet;

use crt_core::{AssetId, SimRng};

use crate::{PolicyError, PolicyResult, SelectionPolicy};

/// Members never leave on their own: draws are always empty and `egress`
/// fails with `Permanent`.  Out-of-band exits through `remove` still work,
/// so a sink can hold any state that forced loss drains.
#[derive(Debug, Default)]
pub struct Sink {
    members: FxHashSet<AssetId>,
}

impl Sink {
    pub const NAME: &'static str = "sink";

    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionPolicy for Sink {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn ingress(&mut self, id: AssetId, _rng: &mut SimRng) -> PolicyResult<()> {
        if !self.members.insert(id) {
            return Err(PolicyError::AlreadyMember { policy: Self::NAME, id });
        }
        Ok(())
    }

    fn egress(&mut self, id: AssetId) -> PolicyResult<()> {
        Err(PolicyError::Permanent(id))
    }

    fn remove(&mut self, id: AssetId) -> PolicyResult<()> {
        if !self.members.remove(&id) {
            return Err(PolicyError::NotMember { policy: Self::NAME, id });
        }
        Ok(())
    }

    fn draw(&mut self, _budget: usize, _rng: &mut SimRng) -> Vec<AssetId> {
        Vec::new()
    }

    fn contains(&self, id: AssetId) -> bool {
        self.members.contains(&id)
    }

    fn len(&self) -> usize {
        self.members.len()
    }

    fn members(&self) -> Vec<AssetId> {
        let mut ids: Vec<_> = self.members.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}
