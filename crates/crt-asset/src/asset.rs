//! The per-asset state machine.

use crt_core::{AssetId, NaiveDate, TripId};

use crate::{AssetError, AssetResult, AssetState, TripLog, Trigger};

/// One physical asset.
///
/// Trip bookkeeping is done against a [`TripLog`] passed in by the caller:
/// every transition that opens or closes a trip writes to the log exactly
/// once before returning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
    pub id:         AssetId,
    pub created_at: NaiveDate,
    state:          AssetState,
    /// Open trip while `in_use`; after a loss, the trip that ended in loss.
    current_trip:   Option<TripId>,
}

impl Asset {
    /// A new asset starts `idle` with no trip.
    pub fn new(id: AssetId, created_at: NaiveDate) -> Self {
        Self {
            id,
            created_at,
            state: AssetState::Idle,
            current_trip: None,
        }
    }

    #[inline]
    pub fn state(&self) -> AssetState {
        self.state
    }

    #[inline]
    pub fn current_trip(&self) -> Option<TripId> {
        self.current_trip
    }

    /// Apply the natural next transition for the current state:
    ///
    /// - `idle`   → rent: open a trip starting `day`;
    /// - `in_use` → recall: close the open trip with `(idle, day)`;
    /// - `lost`   → nothing (`Ok(None)`).
    ///
    /// Returns the trip that was opened or closed.
    pub fn advance(&mut self, day: NaiveDate, log: &mut TripLog) -> AssetResult<Option<TripId>> {
        match self.state {
            AssetState::Idle => {
                let next = self.check(Trigger::Rent)?;
                let trip = log.open(self.id, day);
                self.current_trip = Some(trip);
                self.state = next;
                Ok(Some(trip))
            }
            AssetState::InUse => {
                let next = self.check(Trigger::Recall)?;
                let trip = self.current_trip.ok_or(AssetError::NoOpenTrip(self.id))?;
                log.append(trip, AssetState::Idle, day)?;
                self.current_trip = None;
                self.state = next;
                Ok(Some(trip))
            }
            AssetState::Lost => Ok(None),
        }
    }

    /// Lose an `in_use` asset on `day`, closing its open trip with
    /// `(lost, day)`.  Fails from any other state.
    pub fn force_loss(&mut self, day: NaiveDate, log: &mut TripLog) -> AssetResult<TripId> {
        let next = self.check(Trigger::Lose)?;
        let trip = self.current_trip.ok_or(AssetError::NoOpenTrip(self.id))?;
        log.append(trip, AssetState::Lost, day)?;
        self.state = next;
        Ok(trip)
    }

    fn check(&self, trigger: Trigger) -> AssetResult<AssetState> {
        self.state.apply(trigger).ok_or(AssetError::InvalidTransition {
            asset: self.id,
            from: self.state,
            trigger,
        })
    }
}
