//! Random index selection.
//!
//! Picking a quote goes through [`RandomSource`] so callers can swap the
//! thread RNG for a fixed sequence in tests.

use rand::Rng;
use std::collections::VecDeque;

pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Uniform selection backed by `rand::thread_rng`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Replays a fixed list of values, each reduced modulo `len`.
/// Yields 0 once the list is exhausted.
#[derive(Debug, Default, Clone)]
pub struct SequenceRandom {
    values: VecDeque<usize>,
}

impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.values.pop_front().unwrap_or(0) % len
    }
}

/// Picks one element of `pool`, or `None` when it is empty.
pub fn pick<'a, T, R: RandomSource + ?Sized>(pool: &'a [T], rng: &mut R) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.next_index(pool.len()))
}
