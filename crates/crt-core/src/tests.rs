//! Unit tests for crt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AssetId, IdCounter, TripId};

    #[test]
    fn counters_start_at_one() {
        let mut assets = IdCounter::<AssetId>::new();
        assert_eq!(assets.next_id(), AssetId(1));
        assert_eq!(assets.next_id(), AssetId(2));
        assert_eq!(assets.issued(), 2);
    }

    #[test]
    fn independent_counters_per_kind() {
        let mut assets = IdCounter::<AssetId>::new();
        let mut trips = IdCounter::<TripId>::new();

        // Interleave creation; neither sequence sees the other.
        let a1 = assets.next_id();
        let t1 = trips.next_id();
        let a2 = assets.next_id();
        let t2 = trips.next_id();

        assert_eq!((a1, a2), (AssetId(1), AssetId(2)));
        assert_eq!((t1, t2), (TripId(1), TripId(2)));
    }

    #[test]
    fn separate_counters_of_same_kind_are_independent() {
        let mut first = IdCounter::<AssetId>::new();
        let mut second = IdCounter::<AssetId>::new();
        first.next_id();
        first.next_id();
        assert_eq!(second.next_id(), AssetId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AssetId(7).to_string(), "AssetId(7)");
        assert_eq!(TripId(3).to_string(), "TripId(3)");
    }
}

#[cfg(test)]
mod time {
    use chrono::NaiveDate;

    use crate::{SimClock, Tick};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn clock_advances_one_day_per_tick() {
        let mut clock = SimClock::new(day(2024, 2, 28));
        clock.advance().unwrap();
        assert_eq!(clock.current_date(), day(2024, 2, 29));
        clock.advance().unwrap();
        assert_eq!(clock.current_date(), day(2024, 3, 1));
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed_days(), 2);
    }

    #[test]
    fn clock_overflow_is_an_error() {
        let mut clock = SimClock::new(NaiveDate::MAX);
        assert!(clock.advance().is_err());
        assert_eq!(clock.current_tick, Tick::ZERO);
    }
}

#[cfg(test)]
mod demand {
    use chrono::NaiveDate;

    use crate::{CrtError, DemandSeries};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn accepts_increasing_dates() {
        let s = DemandSeries::new(vec![(day(1), 3), (day(2), 0), (day(5), 7)]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.first_date(), Some(day(1)));
        assert_eq!(s.last_date(), Some(day(5)));
        assert!(!s.is_contiguous());
    }

    #[test]
    fn rejects_repeated_or_backwards_dates() {
        let err = DemandSeries::new(vec![(day(1), 3), (day(3), 1), (day(2), 1)]).unwrap_err();
        match err {
            CrtError::NonMonotonicDemand { index, previous, date } => {
                assert_eq!(index, 2);
                assert_eq!(previous, day(3));
                assert_eq!(date, day(2));
            }
            other => panic!("unexpected error {other}"),
        }
        assert!(DemandSeries::new(vec![(day(1), 3), (day(1), 4)]).is_err());
    }

    #[test]
    fn daily_builds_contiguous_series() {
        let s = DemandSeries::daily(day(30), [1, 2, 3]).unwrap();
        assert!(s.is_contiguous());
        let dates: Vec<_> = s.iter().map(|(d, _)| d).collect();
        assert_eq!(dates, [day(30), day(31), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()]);
    }

    #[test]
    fn empty_series_is_valid() {
        let s = DemandSeries::new(vec![]).unwrap();
        assert!(s.is_empty());
        assert!(s.is_contiguous());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.random::<u64>(), r2.random::<u64>());
            assert_eq!(r1.poisson(3.0), r2.poisson(3.0));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn poisson_zero_mean_is_zero() {
        let mut rng = SimRng::new(1);
        for _ in 0..50 {
            assert_eq!(rng.poisson(0.0), 0);
        }
        assert_eq!(rng.poisson(-1.0), 0);
    }

    #[test]
    fn poisson_sample_mean_close_to_lambda() {
        let mut rng = SimRng::new(7);
        let n = 20_000;
        for lambda in [1.0, 4.0, 80.0] {
            let total: u64 = (0..n).map(|_| rng.poisson(lambda) as u64).sum();
            let mean = total as f64 / n as f64;
            assert!((mean - lambda).abs() < lambda * 0.05 + 0.05, "lambda {lambda}: got {mean}");
        }
    }

    #[test]
    fn normal_moments() {
        let mut rng = SimRng::new(99);
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| rng.normal(10.0, 2.0)).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!((mean - 10.0).abs() < 0.1, "mean {mean}");
        assert!((var.sqrt() - 2.0).abs() < 0.1, "std {}", var.sqrt());
    }

    #[test]
    fn log_normal_is_positive() {
        let mut rng = SimRng::new(3);
        for _ in 0..1000 {
            assert!(rng.log_normal(0.0, 1.0) > 0.0);
        }
    }
}
