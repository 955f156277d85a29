//! Per-day count of assets in each state.

use std::fmt;

use crt_asset::{Asset, AssetState};

/// Number of assets in each state.  Keys are always reported in the order
/// `idle, in_use, lost`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Census {
    pub idle:   usize,
    pub in_use: usize,
    pub lost:   usize,
}

impl Census {
    /// Count `assets` by state.
    pub fn count(assets: &[Asset]) -> Self {
        let mut census = Census::default();
        for asset in assets {
            *census.slot(asset.state()) += 1;
        }
        census
    }

    pub fn get(&self, state: AssetState) -> usize {
        match state {
            AssetState::Idle  => self.idle,
            AssetState::InUse => self.in_use,
            AssetState::Lost  => self.lost,
        }
    }

    /// Every asset ever created; assets are relabelled, never removed.
    pub fn total(&self) -> usize {
        self.idle + self.in_use + self.lost
    }

    /// `(state, count)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetState, usize)> + '_ {
        AssetState::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    fn slot(&mut self, state: AssetState) -> &mut usize {
        match state {
            AssetState::Idle  => &mut self.idle,
            AssetState::InUse => &mut self.in_use,
            AssetState::Lost  => &mut self.lost,
        }
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "idle={} in_use={} lost={}", self.idle, self.in_use, self.lost)
    }
}
