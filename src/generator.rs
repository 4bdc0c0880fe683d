// ♾️ Unbounded Generator Pipeline - lazy ascending sequence, filtered and summed
//
// Given a number k and a count n, find the total of the double of n even
// numbers starting with k, where the square root of each number is > 20.

use crate::error::{KataError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// ASCENDING GENERATOR
// ============================================================================

/// Pull-based `start, start + 1, start + 2, ...`
///
/// Only computes the next value when asked. Ends instead of wrapping once
/// the next value would overflow `i64`.
#[derive(Debug, Clone)]
pub struct Ascending {
    start: i64,
    next: Option<i64>,
}

impl Ascending {
    pub fn starting_at(start: i64) -> Self {
        Ascending {
            start,
            next: Some(start),
        }
    }

    /// Rewind to the original start value
    pub fn restart(&mut self) {
        self.next = Some(self.start);
    }
}

impl Iterator for Ascending {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(current)
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorPipeline {
    /// Elements must have a square root strictly above this (default: 20)
    pub sqrt_threshold: f64,
}

impl GeneratorPipeline {
    pub fn new() -> Self {
        GeneratorPipeline { sqrt_threshold: 20.0 }
    }

    fn accepts(&self, e: i64) -> bool {
        e % 2 == 0 && (e as f64).sqrt() > self.sqrt_threshold
    }

    /// Iterator chain: filter even, filter sqrt, double, take n, sum.
    ///
    /// Doubling or summing past `i64::MAX` is `KataError::Overflow`. When the
    /// generator runs out before `n` elements are accepted, the partial sum
    /// is returned.
    pub fn compute_declarative(&self, k: i64, n: usize) -> Result<i64> {
        debug!(k, n, threshold = self.sqrt_threshold, "computing declaratively");

        Ascending::starting_at(k)
            .filter(|e| e % 2 == 0)
            .filter(|e| (*e as f64).sqrt() > self.sqrt_threshold)
            .map(|e| e.checked_mul(2))
            .take(n)
            .try_fold(0i64, |total, doubled| doubled.and_then(|d| total.checked_add(d)))
            .ok_or(KataError::Overflow("generator"))
    }

    /// Brute-force scan over the same predicate, same overflow rules
    pub fn compute_imperative(&self, k: i64, n: usize) -> Result<i64> {
        let mut result: i64 = 0;
        let mut index = k;
        let mut count = 0;

        while count < n {
            if self.accepts(index) {
                let doubled = index.checked_mul(2).ok_or(KataError::Overflow("generator"))?;
                result = result.checked_add(doubled).ok_or(KataError::Overflow("generator"))?;
                count += 1;
            }
            index = match index.checked_add(1) {
                Some(next) => next,
                None => break,
            };
        }

        Ok(result)
    }
}

impl Default for GeneratorPipeline {
    fn default() -> Self {
        Self::new()
    }
}

pub fn compute(k: i64, n: usize) -> Result<i64> {
    GeneratorPipeline::new().compute_declarative(k, n)
}

// ============================================================================
// TESTS
// ============================================================================
