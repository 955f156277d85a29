//! generate — synthetic crate-pool history.
//!
//! Runs one pool over a seasonal demand curve and writes the demand curve,
//! the trip log, the final asset table and the daily census to
//! `output/generate/`.
//!
//! ```text
//! cargo run -p generate --release [config.json]
//! ```
//!
//! Without a config file the built-in default is used: 2 000 crates, a
//! 100-day mean trip, 15 % shrinkage and one new crate per day on average.
//! `RUST_LOG=info` (or `debug` for per-day censuses) enables logging.

mod demand;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crt_asset::{Asset, TripLog};
use crt_core::NaiveDate;
use crt_output::{CsvWriter, OutputWriter, SimOutputObserver};
use crt_sim::{Census, PoolBuilder, PoolConfig, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const POPULATION:         usize = 2_000;
const MEAN_TRIP_DAYS:     f64   = 100.0;
const SHRINKAGE:          f64   = 0.15;
const REPLENISHMENT_RATE: f64   = 1.0;
const SIM_DAYS:           usize = 2_000;
const DEMAND_SEED:        u64   = 42;
const OUTPUT_DIR:         &str  = "output/generate";

// ── Observer wrapper to report progress ───────────────────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner: SimOutputObserver<W>,
    days:  usize,
    last:  Census,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, days: 0, last: Census::default() }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_tick_end(&mut self, date: NaiveDate, census: &Census) {
        self.days += 1;
        self.last = *census;
        if self.days % 365 == 0 {
            info!("{date}: year {} {census}", self.days / 365);
        }
        self.inner.on_tick_end(date, census);
    }

    fn on_sim_end(&mut self, final_date: NaiveDate, trips: &TripLog, assets: &[Asset]) {
        self.inner.on_sim_end(final_date, trips, assets);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config() -> Result<PoolConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))
        }
        None => {
            let start = NaiveDate::from_ymd_opt(2019, 1, 1).context("start date")?;
            Ok(PoolConfig::from_shrinkage(
                POPULATION,
                MEAN_TRIP_DAYS,
                SHRINKAGE,
                REPLENISHMENT_RATE,
                start,
            )?)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config()?;
    println!("=== generate — crate pool simulator ===");
    println!(
        "Crates: {}  |  T: {} days  |  loss: {:.6}/day  |  replenish: {}/day  |  Seed: {}",
        config.population,
        config.mean_trip_duration,
        config.daily_loss_rate,
        config.replenishment_rate,
        config.seed,
    );

    // 1. Demand.
    let demand = demand::seasonal(config.start_date, SIM_DAYS, DEMAND_SEED)?;
    let total: u64 = demand.iter().map(|(_, d)| u64::from(d)).sum();
    println!(
        "Demand: {} days from {} (total {total} rentals requested)",
        demand.len(),
        config.start_date
    );
    println!();

    // 2. Pool.
    let mut pool = PoolBuilder::new(config).build()?;

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    CsvWriter::write_demand(Path::new(OUTPUT_DIR), &demand)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    pool.run(&demand, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  demand.csv        : {} rows", demand.len());
    println!("  daily_reports.csv : {} rows", obs.days);
    println!("  trips.csv         : {} rows", pool.trips().len());
    println!("  assets.csv        : {} rows", pool.assets().len());
    println!("  final census      : {}", obs.last);
    println!();
    println!("Summary");
    println!("{}", "-".repeat(35));
    println!("{}", pool.trips().summary());
    println!("{}", "-".repeat(35));

    Ok(())
}
