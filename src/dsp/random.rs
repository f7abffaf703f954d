//! Deterministic pseudo-random numbers for per-strike randomization.
//!
//! A plain 32-bit linear congruential generator using the Numerical Recipes
//! constants. It is not statistically strong, but it is cheap, allocation-free
//! and reproducible from a seed, which is all the cymbal needs: the same seed
//! always yields the same spectral fingerprint.

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Random {
    seed: u32,
}

impl Random {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn reseed(&mut self, seed: u32) {
        self.seed = seed;
    }

    /// Advance the generator and return the raw 32-bit state.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.seed
    }

    /// Next value normalized to `[0, 1]`.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        self.next_u32() as f32 / u32::MAX as f32
    }
}
