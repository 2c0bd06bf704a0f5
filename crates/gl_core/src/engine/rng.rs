//! Injectable randomness for the match engine.
//!
//! Production matches use [`ThreadRandom`] and are not reproducible.
//! [`SeededRandom`] replays a match from a seed; [`FixedRandom`] and
//! [`SequenceRandom`] feed scripted draws to tests.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform draw in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Non-seeded thread-local generator.
#[derive(Debug, Clone, Default)]
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    pub fn new() -> Self {
        Self(rand::thread_rng())
    }
}

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// ChaCha8 generator; same seed, same draws.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Returns the same value on every draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandom(f64);

impl FixedRandom {
    /// `value` is clamped into `[0, 1)`.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0 - f64::EPSILON))
    }
}

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// Cycles through a scripted list of draws.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// An empty script behaves like `FixedRandom::new(0.5)`.
    pub fn new(values: Vec<f64>) -> Self {
        let values = if values.is_empty() {
            vec![0.5]
        } else {
            values.into_iter().map(|v| v.clamp(0.0, 1.0 - f64::EPSILON)).collect()
        };
        Self { values, cursor: 0 }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
