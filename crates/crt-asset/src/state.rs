//! Asset states, triggers and the transition table.
//!
//! ```text
//!          rent            lose
//!   idle ───────► in_use ───────► lost
//!     ▲             │
//!     └─────────────┘
//!          recall
//! ```

use std::fmt;

/// Lifecycle state of one asset.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AssetState {
    /// At the depot, available for rent (initial state).
    #[default]
    Idle,
    /// Out on a trip.
    InUse,
    /// Permanently gone.  Terminal.
    Lost,
}

impl AssetState {
    /// All states in census key order.
    pub const ALL: [AssetState; 3] = [AssetState::Idle, AssetState::InUse, AssetState::Lost];

    /// The transition table.  `None` means the trigger is not allowed from
    /// this state.
    pub fn apply(self, trigger: Trigger) -> Option<AssetState> {
        match (self, trigger) {
            (AssetState::Idle,  Trigger::Rent)   => Some(AssetState::InUse),
            (AssetState::InUse, Trigger::Recall) => Some(AssetState::Idle),
            (AssetState::InUse, Trigger::Lose)   => Some(AssetState::Lost),
            _ => None,
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, AssetState::Lost)
    }

    /// Position in [`AssetState::ALL`]; handy for per-state arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable label used in reports and output files.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetState::Idle  => "idle",
            AssetState::InUse => "in_use",
            AssetState::Lost  => "lost",
        }
    }
}

impl fmt::Display for AssetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event that moves an asset between states.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Trigger {
    Rent,
    Recall,
    Lose,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trigger::Rent   => "rent",
            Trigger::Recall => "recall",
            Trigger::Lose   => "lose",
        })
    }
}
