//! Simulation-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! A pool owns exactly one `SimRng`, seeded once at construction and never
//! reseeded.  Every stochastic decision (policy draws, forced losses,
//! replenishment counts) pulls from it in a fixed order, so a given seed
//! always reproduces the same run.
//!
//! The distribution helpers below are implemented directly on top of
//! uniform draws so the sequence of values consumed per call is fixed and
//! documented.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Above this mean, Poisson counts use the normal approximation instead of
/// Knuth's product method (whose cost grows linearly with the mean).
const POISSON_KNUTH_LIMIT: f64 = 30.0;

/// Single-threaded simulation RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` APIs directly
    /// (`SliceRandom::choose_multiple`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Standard normal variate (Box–Muller, cosine branch).
    pub fn standard_normal(&mut self) -> f64 {
        // 1 - U keeps u1 in (0, 1] so ln() is finite.
        let u1 = 1.0 - self.0.r#gen::<f64>();
        let u2: f64 = self.0.r#gen();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Normal variate with the given mean and standard deviation.
    #[inline]
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.standard_normal()
    }

    /// Log-normal variate: `exp(N(mu, sigma))`.
    #[inline]
    pub fn log_normal(&mut self, mu: f64, sigma: f64) -> f64 {
        self.normal(mu, sigma).exp()
    }

    /// Poisson-distributed count with mean `lambda`.
    ///
    /// Returns 0 for `lambda <= 0` (and NaN) without consuming randomness.
    pub fn poisson(&mut self, lambda: f64) -> u32 {
        if lambda.is_nan() || lambda <= 0.0 {
            return 0;
        }
        if lambda > POISSON_KNUTH_LIMIT {
            let approx = self.normal(lambda, lambda.sqrt()).round();
            return approx.clamp(0.0, u32::MAX as f64) as u32;
        }

        let limit = (-lambda).exp();
        let mut product: f64 = self.0.r#gen();
        let mut count = 0u32;
        while product > limit {
            count += 1;
            product *= self.0.r#gen::<f64>();
        }
        count
    }
}
