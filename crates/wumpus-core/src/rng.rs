//! The random-number capability injected into the engine.
//!
//! The engine never touches an RNG directly; it calls through
//! [`RandomSource`] so tests can substitute a scripted sequence of values.

use std::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A source of uniformly distributed integers.
///
/// The engine calls this with the inclusive ranges 1..=20 (room draws)
/// and 0..=3 (wumpus move direction). `low` must not exceed `high`.
pub trait RandomSource {
    /// A uniform integer in the inclusive range `[low, high]`.
    fn next_int(&mut self, low: i32, high: i32) -> i32;
}

/// Production random source backed by [`StdRng`].
#[derive(Debug)]
pub struct GameRandomSource {
    rng: StdRng,
}

impl GameRandomSource {
    /// A source seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A deterministic source for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GameRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for GameRandomSource {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        self.rng.random_range(low..=high)
    }
}

/// Test double that replays a scripted queue of values.
///
/// Values are consumed in call order regardless of the requested range.
/// Once the queue is exhausted every call returns `low`.
#[derive(Debug, Default)]
pub struct ScriptedRandomSource {
    values: VecDeque<i32>,
}

impl ScriptedRandomSource {
    /// A source that returns `values` in order.
    pub fn new(values: Vec<i32>) -> Self {
        Self {
            values: values.into(),
        }
    }
}

impl RandomSource for ScriptedRandomSource {
    fn next_int(&mut self, low: i32, _high: i32) -> i32 {
        self.values.pop_front().unwrap_or(low)
    }
}
