use crt_core::{AssetId, TripId};
use thiserror::Error;

use crate::{AssetState, Trigger};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("{asset}: no `{trigger}` transition from state {from}")]
    InvalidTransition {
        asset:   AssetId,
        from:    AssetState,
        trigger: Trigger,
    },

    #[error("{0} is in use but has no open trip")]
    NoOpenTrip(AssetId),

    #[error("{0} is not in the trip log")]
    UnknownTrip(TripId),

    #[error("{0} is already closed")]
    TripClosed(TripId),

    #[error("{trip}: a trip can only be closed with idle or lost, not {state}")]
    TripEntry { trip: TripId, state: AssetState },
}

pub type AssetResult<T> = Result<T, AssetError>;
