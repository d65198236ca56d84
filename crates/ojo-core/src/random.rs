//! Random source used for embellishments.
//!
//! The converter never touches a process-wide generator. Each call gets its
//! own [`RandomSource`]; production wires a [`SystemRandom`], tests wire a
//! [`SequenceRandom`] that replays fixed values.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform index in `0..n`. Callers never pass `n == 0`.
    fn index(&mut self, n: usize) -> usize;
}

/// Uniformly pick one element, or `None` for an empty slice.
///
/// Equivalent to shuffling `items` and taking the first element.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.index(items.len()))
}

/// The element at `forced` when that index is in range, otherwise a uniform pick.
pub fn choose_or_forced<'a, T>(
    rng: &mut dyn RandomSource,
    items: &'a [T],
    forced: Option<usize>,
) -> Option<&'a T> {
    match forced.and_then(|i| items.get(i)) {
        Some(item) => Some(item),
        None => choose(rng, items),
    }
}

/// `StdRng`-backed source, seeded from OS entropy or a fixed seed.
pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn index(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}

/// Replays `values` in a cycle, each reduced modulo the requested bound.
///
/// An empty sequence always yields 0.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<usize>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, next: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn index(&mut self, n: usize) -> usize {
        if self.values.is_empty() || n == 0 {
            return 0;
        }
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v % n
    }
}
