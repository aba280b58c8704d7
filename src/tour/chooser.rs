use std::collections::VecDeque;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the engine's choice points (next edge, next sub-tour start).
pub trait Chooser {
    /// Pick an index in `0..len`. Never called with `len == 0`.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Pick one item from a non-empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> where Self: Sized {
        if items.is_empty() { None } else { items.get(self.choose_index(items.len())) }
    }
}

impl<C: Chooser + ?Sized> Chooser for &mut C {
    fn choose_index(&mut self, len: usize) -> usize { (**self).choose_index(len) }
}

/// Uniform random choice backed by any [`Rng`].
#[derive(Clone, Debug)]
pub struct Uniform<R>(pub R);

impl Uniform<StdRng> {
    /// Reproducible choices from a fixed seed.
    pub fn seeded(seed: u64) -> Self { Self(StdRng::seed_from_u64(seed)) }

    /// Choices seeded from the thread-local generator.
    pub fn from_entropy() -> Self { Self(StdRng::from_rng(&mut rand::rng())) }
}

impl<R: Rng> Chooser for Uniform<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Replays a fixed sequence of indices, taken modulo the candidate count.
/// Once the script runs out every choice is the first candidate.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    picks: VecDeque<usize>,
}

impl Scripted {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self { picks: picks.into_iter().collect() }
    }

    /// Always choose the first candidate.
    pub fn first() -> Self { Self::default() }
}

impl Chooser for Scripted {
    fn choose_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }
}
