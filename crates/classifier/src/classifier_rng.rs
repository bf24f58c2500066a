//! Randomness source for the classifier's noise term.
//!
//! Wraps `ChaCha8Rng` so the noise is an explicit, swappable input rather than
//! hidden global state. Production code seeds it from OS entropy; tests and
//! reproducible runs seed it from a `u64`.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone)]
pub struct ClassifierRng(pub ChaCha8Rng);

impl ClassifierRng {
    /// Create a `ClassifierRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Create a free-running `ClassifierRng` seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

impl RngCore for ClassifierRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
