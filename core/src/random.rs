use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random bytes used by RND
pub trait Randomizer {
    /// A byte uniformly distributed over 0..=255
    fn next_byte(&mut self) -> u8;
}

/// Randomizer backed by the standard rng, seeded from the OS
pub struct StdRandomizer {
    rng: StdRng,
}

impl StdRandomizer {
    pub fn new() -> Self {
        StdRandomizer {
            rng: StdRng::from_entropy(),
        }
    }

    /// A randomizer that always produces the same sequence for the same `seed`
    pub fn seeded(seed: u64) -> Self {
        StdRandomizer {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer for StdRandomizer {
    fn next_byte(&mut self) -> u8 {
        self.rng.gen()
    }
}
