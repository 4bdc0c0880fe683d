// ⚡ Parallel Map - expensive per-element work spread across a rayon pool
//
// Filter evens, run the workload on each, sum. Addition is associative and
// commutative, so the sequential and parallel sums are always equal.

use crate::error::{KataError, Result};
use rayon::prelude::*;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

// ============================================================================
// WORKLOAD
// ============================================================================

/// Per-element transformation; must not touch shared mutable state.
/// `None` when the result does not fit in an `i64`.
pub trait Workload: Sync {
    fn compute(&self, number: i64) -> Option<i64>;
}

/// Doubles instantly
#[derive(Debug, Clone, Copy, Default)]
pub struct Doubling;

impl Workload for Doubling {
    fn compute(&self, number: i64) -> Option<i64> {
        number.checked_mul(2)
    }
}

/// Doubles after sleeping `cost`, standing in for an expensive call
#[derive(Debug, Clone, Copy)]
pub struct SimulatedCost {
    pub cost: Duration,
}

impl SimulatedCost {
    pub fn new(cost: Duration) -> Self {
        SimulatedCost { cost }
    }
}

impl Workload for SimulatedCost {
    fn compute(&self, number: i64) -> Option<i64> {
        if !self.cost.is_zero() {
            thread::sleep(self.cost);
        }
        number.checked_mul(2)
    }
}

// ============================================================================
// PIPELINES
// ============================================================================

pub fn sum_sequential<W: Workload + ?Sized>(numbers: &[i64], workload: &W) -> Result<i64> {
    numbers
        .iter()
        .filter(|e| *e % 2 == 0)
        .map(|e| workload.compute(*e))
        .try_fold(0i64, |total, value| value.and_then(|v| total.checked_add(v)))
        .ok_or(KataError::Overflow("parallel-map"))
}

/// Runs on rayon's global pool
pub fn sum_parallel<W: Workload + ?Sized>(numbers: &[i64], workload: &W) -> Result<i64> {
    numbers
        .par_iter()
        .filter(|e| *e % 2 == 0)
        .map(|e| workload.compute(*e))
        .try_reduce(|| 0, |a, b| a.checked_add(b))
        .ok_or(KataError::Overflow("parallel-map"))
}

/// Runs on a dedicated pool of exactly `workers` threads
pub fn sum_parallel_with_workers<W: Workload + ?Sized>(
    numbers: &[i64],
    workload: &W,
    workers: usize,
) -> Result<i64> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    debug!(workers = pool.current_num_threads(), "built worker pool");

    pool.install(|| sum_parallel(numbers, workload))
}

// ============================================================================
// TIMING
// ============================================================================

/// Run `f`, log how long it took, return its value and the elapsed time
pub fn timed<T, F: FnOnce() -> T>(label: &str, f: F) -> (T, Duration) {
    let started = Instant::now();
    let value = f();
    let elapsed = started.elapsed();

    let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    info!(label, elapsed_ms, "method took {:?}", elapsed);
    (value, elapsed)
}

// ============================================================================
// TESTS
// ============================================================================
