//! The six-sided die.
//!
//! Randomness is injected: a [`Die`] owns whatever [`RngCore`] it was built
//! with. Seeded dice replay the same faces, which keeps tests and parallel
//! workers reproducible. The turn engine only sees the [`RollSource`] trait, so
//! tests can swap in a scripted die.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces on the die.
pub const FACES: u8 = 6;

/// Face that ends a turn with nothing banked.
pub const BUST_FACE: u8 = 1;

/// Anything that can produce die faces in `1..=6`.
pub trait RollSource {
    /// Roll once.
    fn roll(&mut self) -> u8;
}

impl<T: RollSource + ?Sized> RollSource for &mut T {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Fair six-sided die backed by an injectable RNG.
#[derive(Debug, Clone)]
pub struct Die<R = ChaCha8Rng> {
    rng: R,
}

impl Die<ChaCha8Rng> {
    /// Die with a reproducible face sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Die seeded from OS entropy, one fresh sequence per process.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: RngCore> Die<R> {
    /// Wrap an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> RollSource for Die<R> {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=FACES)
    }
}

/// Infinite; never returns `None`.
impl<R: RngCore> Iterator for Die<R> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.roll())
    }
}
