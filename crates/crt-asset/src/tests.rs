//! Unit tests for crt-asset.

use crt_core::{AssetId, NaiveDate};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

#[cfg(test)]
mod state_tests {
    use crate::{AssetState, Trigger};

    #[test]
    fn transition_table() {
        use AssetState::*;
        use Trigger::*;

        let expected = [
            (Idle,  Rent,   Some(InUse)),
            (Idle,  Recall, None),
            (Idle,  Lose,   None),
            (InUse, Rent,   None),
            (InUse, Recall, Some(Idle)),
            (InUse, Lose,   Some(Lost)),
            (Lost,  Rent,   None),
            (Lost,  Recall, None),
            (Lost,  Lose,   None),
        ];
        for (from, trigger, to) in expected {
            assert_eq!(from.apply(trigger), to, "{from} --{trigger}-->");
        }
    }

    #[test]
    fn labels_and_order() {
        let labels: Vec<_> = AssetState::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(labels, ["idle", "in_use", "lost"]);
        for (i, s) in AssetState::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
        assert!(AssetState::Lost.is_terminal());
        assert!(!AssetState::InUse.is_terminal());
    }
}

#[cfg(test)]
mod asset_tests {
    use super::*;
    use crate::{Asset, AssetError, AssetState, TripLog, Trigger};

    #[test]
    fn new_asset_is_idle_without_trip() {
        let asset = Asset::new(AssetId(1), day(1));
        assert_eq!(asset.state(), AssetState::Idle);
        assert_eq!(asset.created_at, day(1));
        assert_eq!(asset.current_trip(), None);
    }

    #[test]
    fn advance_alternates_and_logs_each_trip() {
        let mut log = TripLog::new();
        let mut asset = Asset::new(AssetId(1), day(1));

        let t1 = asset.advance(day(1), &mut log).unwrap().unwrap();
        assert_eq!(asset.state(), AssetState::InUse);
        assert_eq!(asset.current_trip(), Some(t1));
        assert!(!log.get(t1).unwrap().is_closed());

        assert_eq!(asset.advance(day(2), &mut log).unwrap(), Some(t1));
        assert_eq!(asset.state(), AssetState::Idle);
        assert_eq!(asset.current_trip(), None);

        let t2 = asset.advance(day(3), &mut log).unwrap().unwrap();
        assert_eq!(asset.state(), AssetState::InUse);
        asset.advance(day(4), &mut log).unwrap();
        assert_eq!(asset.state(), AssetState::Idle);

        assert_ne!(t1, t2);
        assert_eq!(log.len(), 2);
        assert_eq!(
            log.get(t1).unwrap().states(),
            &[(AssetState::InUse, day(1)), (AssetState::Idle, day(2))]
        );
    }

    #[test]
    fn force_loss_closes_trip_for_good() {
        let mut log = TripLog::new();
        let mut asset = Asset::new(AssetId(3), day(1));
        let trip = asset.advance(day(1), &mut log).unwrap().unwrap();

        assert_eq!(asset.force_loss(day(5), &mut log).unwrap(), trip);
        assert_eq!(asset.state(), AssetState::Lost);
        assert_eq!(asset.current_trip(), Some(trip));

        // Lost is terminal: advance is a no-op and the trip is immutable.
        assert_eq!(asset.advance(day(6), &mut log).unwrap(), None);
        assert_eq!(asset.state(), AssetState::Lost);
        assert_eq!(log.append(trip, AssetState::Idle, day(7)), Err(AssetError::TripClosed(trip)));
        assert_eq!(
            log.get(trip).unwrap().states(),
            &[(AssetState::InUse, day(1)), (AssetState::Lost, day(5))]
        );
    }

    #[test]
    fn force_loss_requires_in_use() {
        let mut log = TripLog::new();
        let mut asset = Asset::new(AssetId(2), day(1));
        assert_eq!(
            asset.force_loss(day(1), &mut log),
            Err(AssetError::InvalidTransition {
                asset:   AssetId(2),
                from:    AssetState::Idle,
                trigger: Trigger::Lose,
            })
        );
        assert_eq!(asset.state(), AssetState::Idle);
        assert!(log.is_empty());

        asset.advance(day(1), &mut log).unwrap();
        asset.force_loss(day(2), &mut log).unwrap();
        assert!(matches!(
            asset.force_loss(day(3), &mut log),
            Err(AssetError::InvalidTransition { from: AssetState::Lost, .. })
        ));
    }
}

#[cfg(test)]
mod log_tests {
    use super::*;
    use crate::{Asset, AssetError, AssetState, TripLog, TripReport};
    use crt_core::TripId;

    #[test]
    fn trip_ids_count_from_one() {
        let mut log = TripLog::new();
        assert_eq!(log.open(AssetId(9), day(1)), TripId(1));
        assert_eq!(log.open(AssetId(4), day(1)), TripId(2));
        assert!(log.get(TripId(0)).is_none());
        assert!(log.get(TripId(3)).is_none());
    }

    #[test]
    fn append_rejects_bad_entries() {
        let mut log = TripLog::new();
        let trip = log.open(AssetId(1), day(1));
        assert_eq!(
            log.append(trip, AssetState::InUse, day(2)),
            Err(AssetError::TripEntry { trip, state: AssetState::InUse })
        );
        assert_eq!(
            log.append(TripId(77), AssetState::Idle, day(2)),
            Err(AssetError::UnknownTrip(TripId(77)))
        );
    }

    #[test]
    fn dump_reconstructs_start_end_and_state() {
        let mut log = TripLog::new();
        let mut a = Asset::new(AssetId(1), day(1));
        let mut b = Asset::new(AssetId(2), day(1));
        let mut c = Asset::new(AssetId(3), day(1));

        a.advance(day(1), &mut log).unwrap(); // trip 1: completes
        b.advance(day(2), &mut log).unwrap(); // trip 2: lost
        c.advance(day(3), &mut log).unwrap(); // trip 3: still open
        a.advance(day(8), &mut log).unwrap();
        b.force_loss(day(9), &mut log).unwrap();

        let dump = log.dump();
        assert_eq!(dump.len(), 3);
        for (report, trip) in dump.iter().zip(log.iter()) {
            let states = trip.states();
            let (last_state, last_day) = *states.last().unwrap();
            assert_eq!(report.start, states[0].1);
            assert_eq!(states[0].0, AssetState::InUse);
            assert_eq!(report.state, last_state);
            let expected_end = (last_state == AssetState::Idle).then_some(last_day);
            assert_eq!(report.end, expected_end);
        }
        assert_eq!(
            dump[0],
            TripReport {
                trip_id:  TripId(1),
                asset_id: AssetId(1),
                start:    day(1),
                end:      Some(day(8)),
                state:    AssetState::Idle,
            }
        );
        assert_eq!(dump[1].end, None);
        assert_eq!(dump[1].state, AssetState::Lost);
        assert_eq!(dump[2].state, AssetState::InUse);
    }

    #[test]
    fn summary_counts() {
        let mut log = TripLog::new();
        let mut a = Asset::new(AssetId(1), day(1));
        let mut b = Asset::new(AssetId(2), day(1));

        a.advance(day(1), &mut log).unwrap();
        a.advance(day(5), &mut log).unwrap(); // 4 days
        a.advance(day(6), &mut log).unwrap();
        a.advance(day(8), &mut log).unwrap(); // 2 days
        b.advance(day(1), &mut log).unwrap();
        b.force_loss(day(3), &mut log).unwrap();
        a.advance(day(9), &mut log).unwrap(); // open

        let s = log.summary();
        assert_eq!(s.total_trips, 4);
        assert_eq!(s.completed, 2);
        assert_eq!(s.lost, 1);
        assert_eq!(s.in_use, 1);
        assert_eq!(s.mean_trip_days, Some(3.0));
        assert!((s.shrinkage - 0.25).abs() < 1e-12);
        assert!(s.to_string().contains("25.00%"));
    }

    #[test]
    fn empty_summary() {
        let s = TripLog::new().summary();
        assert_eq!(s.total_trips, 0);
        assert_eq!(s.mean_trip_days, None);
        assert_eq!(s.shrinkage, 0.0);
    }
}
