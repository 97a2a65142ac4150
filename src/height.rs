//! Tower heights for newly inserted values.
//!
//! A value is always present on level 0 and is promoted one level further for
//! every successive fair coin flip that comes up heads, so a new node has
//! height `k` with probability `2^-k`. That keeps the expected search cost and
//! the expected link overhead per node at O(log n) without any rebalancing.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Produces the height of each newly created node.
///
/// Every returned height must be at least 1.
pub trait HeightSource {
    fn next_height(&mut self) -> usize;
}

/// Geometric heights driven by fair coin flips from `R`.
#[derive(Debug, Clone)]
pub struct CoinFlip<R = StdRng> {
    rng: R,
}

impl CoinFlip<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: RngCore> CoinFlip<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> HeightSource for CoinFlip<R> {
    fn next_height(&mut self) -> usize {
        let mut height = 1;
        while self.rng.gen_bool(0.5) {
            height += 1;
        }
        height
    }
}

/// Replays a scripted sequence of heights, starting over once it runs out.
///
/// Useful to lay out a list exactly, e.g. in tests or reproductions.
#[derive(Debug, Clone)]
pub struct Fixed {
    heights: Vec<usize>,
    pos: usize,
}

impl Fixed {
    /// Heights of 0 are raised to 1. An empty script always yields 1.
    pub fn new(heights: impl Into<Vec<usize>>) -> Self {
        let mut heights = heights.into();
        for h in heights.iter_mut() {
            *h = (*h).max(1);
        }
        Self { heights, pos: 0 }
    }
}

impl HeightSource for Fixed {
    fn next_height(&mut self) -> usize {
        if self.heights.is_empty() {
            return 1;
        }
        let height = self.heights[self.pos];
        self.pos = (self.pos + 1) % self.heights.len();
        height
    }
}

impl<H: HeightSource + ?Sized> HeightSource for Box<H> {
    fn next_height(&mut self) -> usize {
        (**self).next_height()
    }
}
