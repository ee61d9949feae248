//! Random initial states.
//!
//! The simulation only needs one capability from its random source: a
//! uniform integer in `[0, bound)`. [`RandomSource`] is that seam;
//! [`ChaChaSource`] is the seeded implementation used by default, so a
//! run with a fixed seed is reproducible across platforms.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use strata_core::{Alphabet, State, Symbol};

/// Supplier of uniformly distributed symbols.
pub trait RandomSource {
    /// A uniform integer in `[0, bound)`. `bound` is at least 1.
    fn uniform_below(&mut self, bound: u8) -> u8;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform_below(&mut self, bound: u8) -> u8 {
        (**self).uniform_below(bound)
    }
}

/// A [`RandomSource`] backed by a seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct ChaChaSource {
    rng: ChaCha8Rng,
    seed: u64,
}

impl ChaChaSource {
    /// Deterministic source for `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Source with a seed drawn from the thread-local generator.
    ///
    /// The seed is kept so the run can be reproduced later.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// The seed this source started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for ChaChaSource {
    fn uniform_below(&mut self, bound: u8) -> u8 {
        self.rng.random_range(0..bound)
    }
}

/// A state of `len` cells drawn uniformly from `alphabet`.
///
/// Draws cells left to right, one call per cell.
pub fn random_state<R: RandomSource + ?Sized>(
    len: usize,
    alphabet: Alphabet,
    source: &mut R,
) -> State {
    let size = alphabet.size();
    let cells: Vec<Symbol> = (0..len).map(|_| source.uniform_below(size)).collect();
    State::new(cells)
}
