//! Last-in-first-out selection.

use rustc_hash::FxHashSet;

use crt_core::{AssetId, SimRng};

use crate::{PolicyError, PolicyResult, SelectionPolicy};

/// Stack discipline: each draw returns the `budget` most recently ingressed
/// members (all of them if fewer are present), oldest first.
#[derive(Debug, Default)]
pub struct Lifo {
    stack:   Vec<AssetId>,
    members: FxHashSet<AssetId>,
}

impl Lifo {
    pub const NAME: &'static str = "lifo";

    pub fn new() -> Self {
        Self::default()
    }

    fn take(&mut self, id: AssetId) -> PolicyResult<()> {
        if !self.members.remove(&id) {
            return Err(PolicyError::NotMember { policy: Self::NAME, id });
        }
        // Members leave from the top in the common case; search from there.
        if let Some(pos) = self.stack.iter().rposition(|&m| m == id) {
            self.stack.remove(pos);
        }
        Ok(())
    }
}

impl SelectionPolicy for Lifo {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn ingress(&mut self, id: AssetId, _rng: &mut SimRng) -> PolicyResult<()> {
        if !self.members.insert(id) {
            return Err(PolicyError::AlreadyMember { policy: Self::NAME, id });
        }
        self.stack.push(id);
        Ok(())
    }

    fn egress(&mut self, id: AssetId) -> PolicyResult<()> {
        self.take(id)
    }

    fn remove(&mut self, id: AssetId) -> PolicyResult<()> {
        self.take(id)
    }

    fn draw(&mut self, budget: usize, _rng: &mut SimRng) -> Vec<AssetId> {
        let start = self.stack.len().saturating_sub(budget);
        self.stack[start..].to_vec()
    }

    fn contains(&self, id: AssetId) -> bool {
        self.members.contains(&id)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn members(&self) -> Vec<AssetId> {
        self.stack.clone()
    }
}
