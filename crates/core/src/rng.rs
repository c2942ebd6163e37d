//! RNG module - uniform random piece selection
//!
//! Every draw is an independent, uniform choice among the seven canonical
//! shapes. There is no bag and no anti-repeat rule.
//!
//! The random source is injected, so a seeded [`StdRng`] gives a fully
//! reproducible piece sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pieces::{Shape, CANONICAL_SHAPES};

/// Uniform piece generator over an injectable RNG
#[derive(Debug, Clone)]
pub struct PieceRandomizer<R = StdRng> {
    rng: R,
}

impl PieceRandomizer<StdRng> {
    /// Create a randomizer with a deterministic seed
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PieceRandomizer<R> {
    /// Wrap an existing random source
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw one of the canonical shapes uniformly at random
    pub fn draw(&mut self) -> Shape {
        CANONICAL_SHAPES[self.rng.gen_range(0..CANONICAL_SHAPES.len())]
    }
}

impl Default for PieceRandomizer<StdRng> {
    fn default() -> Self {
        Self::from_seed(1)
    }
}
