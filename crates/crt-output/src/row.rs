//! Plain data row types written by output backends.

use crt_asset::{Asset, AssetState, TripReport};
use crt_core::NaiveDate;
use crt_sim::Census;

/// One trip from the trip log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRow {
    pub trip_id:  u32,
    pub asset_id: u32,
    pub start:    NaiveDate,
    /// `None` while the trip is open or after the asset was lost.
    pub end:      Option<NaiveDate>,
    pub state:    AssetState,
}

impl From<&TripReport> for TripRow {
    fn from(report: &TripReport) -> Self {
        Self {
            trip_id:  report.trip_id.get(),
            asset_id: report.asset_id.get(),
            start:    report.start,
            end:      report.end,
            state:    report.state,
        }
    }
}

/// The census at the end of one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CensusRow {
    pub date:   NaiveDate,
    pub idle:   u64,
    pub in_use: u64,
    pub lost:   u64,
}

impl CensusRow {
    pub fn new(date: NaiveDate, census: &Census) -> Self {
        Self {
            date,
            idle:   census.idle as u64,
            in_use: census.in_use as u64,
            lost:   census.lost as u64,
        }
    }
}

/// Final state of one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetRow {
    pub asset_id:   u32,
    pub created_at: NaiveDate,
    pub state:      AssetState,
}

impl From<&Asset> for AssetRow {
    fn from(asset: &Asset) -> Self {
        Self {
            asset_id:   asset.id.get(),
            created_at: asset.created_at,
            state:      asset.state(),
        }
    }
}
