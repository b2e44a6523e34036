// src/core/static_random.rs

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 generator used for witness selection and random naturals.
///
/// Seeded from the thread RNG by default, or from a fixed seed when runs need
/// to be reproducible.
pub struct StaticRandom {
    rng: ChaCha8Rng,
}

impl StaticRandom {
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill(&mut seed);
        let mut rng = ChaCha8Rng::from_seed(seed);
        let counter = rng.random_range(100..200);
        for _ in 0..counter {
            rng.next_u32();
        }
        StaticRandom { rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        StaticRandom {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Fixed seed if one is given, fresh entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for StaticRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for StaticRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }
}
