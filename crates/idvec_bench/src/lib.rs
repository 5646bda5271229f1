use std::time::{Duration, Instant};

use anyhow::{Result, ensure};
use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng};

mod hashmap_impl;
mod idvec_impl;

use hashmap_impl::HashMapBench;
use idvec_impl::IdVecBench;

const DEFAULT_COUNT: usize = 1_000_000;

/// Operations measured for every structure.
pub trait StoreBenchmark: Sized {
    fn name() -> &'static str;

    fn create(capacity: usize) -> Self;

    /// Inserts `0..count` and returns the handles in insertion order.
    fn insert_sequential(&mut self, count: u64) -> Vec<i64>;

    /// Removes each handle in `handles` and inserts a replacement value.
    fn churn(&mut self, handles: &mut [i64]) -> Result<()>;

    fn read_random(&self, handles: &[i64]) -> Result<u64>;

    fn read_sequential(&self) -> u64;

    fn len(&self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    IdVec,
    HashMap,
}

#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub count: usize,
    /// Share of handles removed and reinserted during the churn phase.
    pub churn_ratio: f64,
    pub random_reads: usize,
    pub seed: u64,
    pub structures: Vec<Structure>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            churn_ratio: 0.25,
            random_reads: DEFAULT_COUNT,
            seed: 42,
            structures: vec![Structure::IdVec, Structure::HashMap],
        }
    }
}

impl BenchConfig {
    /// Default config with `count` overridden by `BENCH_COUNT` (underscores allowed).
    pub fn from_env() -> Self {
        let count = std::env::var("BENCH_COUNT")
            .ok()
            .and_then(|s| s.replace('_', "").parse().ok())
            .unwrap_or(DEFAULT_COUNT);
        Self {
            count,
            random_reads: count,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default)]
struct Timings {
    insert: Duration,
    churn: Duration,
    read_random: Duration,
    read_sequential: Duration,
}

pub fn run(configs: &[BenchConfig]) -> Result<()> {
    for config in configs {
        info!("running {config:?}");
        println!(
            "\n== count: {}, churn: {:.0}%, random reads: {}",
            config.count,
            config.churn_ratio * 100.0,
            config.random_reads
        );
        println!(
            "{:<10} {:>12} {:>12} {:>12} {:>12}",
            "structure", "insert", "churn", "random", "sequential"
        );

        for structure in &config.structures {
            let timings = match structure {
                Structure::IdVec => bench::<IdVecBench>(config)?,
                Structure::HashMap => bench::<HashMapBench>(config)?,
            };
            let name = match structure {
                Structure::IdVec => IdVecBench::name(),
                Structure::HashMap => HashMapBench::name(),
            };
            println!(
                "{:<10} {:>12?} {:>12?} {:>12?} {:>12?}",
                name, timings.insert, timings.churn, timings.read_random, timings.read_sequential
            );
        }
    }
    Ok(())
}

fn bench<B: StoreBenchmark>(config: &BenchConfig) -> Result<Timings> {
    ensure!(config.count > 0, "bench count must be positive");

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut store = B::create(config.count);
    let mut timings = Timings::default();

    let i = Instant::now();
    let mut handles = store.insert_sequential(config.count as u64);
    timings.insert = i.elapsed();
    ensure!(store.len() == config.count, "{} lost elements on insert", B::name());

    let churn_len = ((config.count as f64 * config.churn_ratio) as usize).min(handles.len());
    for idx in (1..handles.len()).rev() {
        handles.swap(idx, rng.random_range(0..=idx));
    }

    let i = Instant::now();
    store.churn(&mut handles[..churn_len])?;
    timings.churn = i.elapsed();
    ensure!(store.len() == config.count, "{} lost elements on churn", B::name());

    let reads: Vec<i64> = (0..config.random_reads)
        .map(|_| handles[rng.random_range(0..handles.len())])
        .collect();

    let i = Instant::now();
    let random_sum = store.read_random(&reads)?;
    timings.read_random = i.elapsed();

    let i = Instant::now();
    let sequential_sum = store.read_sequential();
    timings.read_sequential = i.elapsed();

    info!(
        "{}: random sum {random_sum}, sequential sum {sequential_sum}",
        B::name()
    );

    Ok(timings)
}
