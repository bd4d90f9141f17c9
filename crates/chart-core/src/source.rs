// File: crates/chart-core/src/source.rs
// Summary: Data sources feeding the chart; random sample generator for host screens.

use std::ops::Range;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Produces a fresh series on every call.
pub trait DataSource {
    fn next_series(&mut self) -> Vec<i32>;
}

/// Uniform random integers in `range`, `len` at a time.
pub struct RandomSource<R: Rng> {
    rng: R,
    pub len: usize,
    pub range: Range<i32>,
}

/// Five values in `0..20`.
pub const DEFAULT_LEN: usize = 5;
pub const DEFAULT_RANGE: Range<i32> = 0..20;

impl RandomSource<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for RandomSource<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource<StdRng> {
    /// Reproducible source for tests and snapshot renders.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, len: DEFAULT_LEN, range: DEFAULT_RANGE }
    }

    pub fn with_shape(mut self, len: usize, range: Range<i32>) -> Self {
        self.len = len;
        self.range = range;
        self
    }
}

impl<R: Rng> DataSource for RandomSource<R> {
    fn next_series(&mut self) -> Vec<i32> {
        if self.range.is_empty() {
            return vec![self.range.start; self.len];
        }
        (0..self.len).map(|_| self.rng.random_range(self.range.clone())).collect()
    }
}
