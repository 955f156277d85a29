//! Synthetic seasonal demand curve.
//!
//! demand(t) = trend(t) + weekly(t) + monthly(t) + yearly(t), where
//!
//! ```text
//! trend(t)   = 0.3 · (25 + t / 100)
//! weekly(t)  = a_w(t) · sin²(2πt / 7   + φ_w)     a_w ∈ 0.3 · {0, 1, 2}
//! monthly(t) = a_m(t) · sin (2πt / 30  + φ_m)     a_m ∈ 0.3 · {2, 3, 4}
//! yearly(t)  = a_y(t) · sin (2πt / 365 + φ_y)     a_y ∈ 0.3 · {2, …, 19}
//! ```
//!
//! Phases are drawn once, amplitudes once per day.  Values are truncated to
//! whole crates and floored at zero.

use std::f64::consts::TAU;

use crt_core::{CrtResult, DemandSeries, NaiveDate, SimRng};

const SCALE: f64 = 0.3;

pub fn seasonal(start: NaiveDate, days: usize, seed: u64) -> CrtResult<DemandSeries> {
    let mut rng = SimRng::new(seed);
    let [weekly_phase, monthly_phase, yearly_phase] =
        [(); 3].map(|_| TAU * rng.random::<f64>());

    let values = (0..days).map(|i| {
        let t = i as f64;
        let weekly_amp = SCALE * rng.gen_range(0u32..3) as f64;
        let monthly_amp = SCALE * rng.gen_range(2u32..5) as f64;
        let yearly_amp = SCALE * rng.gen_range(2u32..20) as f64;

        let trend = SCALE * (25.0 + t / 100.0);
        let weekly = weekly_amp * (TAU * t / 7.0 + weekly_phase).sin().powi(2);
        let monthly = monthly_amp * (TAU * t / 30.0 + monthly_phase).sin();
        let yearly = yearly_amp * (TAU * t / 365.0 + yearly_phase).sin();

        (trend + weekly + monthly + yearly).max(0.0) as u32
    });
    DemandSeries::daily(start, values.collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seasonal_is_seeded_and_daily() {
        let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        let a = seasonal(start, 400, 42).unwrap();
        let b = seasonal(start, 400, 42).unwrap();
        assert_eq!(a.len(), 400);
        assert!(a.is_contiguous());
        assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
        // Trend alone is 0.3 · 25 = 7.5 crates per day at the start.
        let mean = a.iter().map(|(_, d)| f64::from(d)).sum::<f64>() / 400.0;
        assert!((3.0..15.0).contains(&mean), "mean demand {mean}");
    }
}
