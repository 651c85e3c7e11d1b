pub mod rand_util;

use std::any::Any;

use rand::Rng;

/// A pseudo-random number generator that can be deterministically replayed from its seed.
///
/// Every roll the battle engine makes goes through a generator of this type, so a battle started
/// with the same seed and the same decisions always plays out the same way.
pub trait PseudoRandomNumberGenerator {
    /// Returns the initial seed the generator was created with.
    fn initial_seed(&self) -> u64;

    /// Returns the next integer in the sequence.
    fn next(&mut self) -> u64;

    /// Mutable cast to [`Any`] for testing.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A real implementation of [`PseudoRandomNumberGenerator`].
pub struct RealPseudoRandomNumberGenerator {
    initial_seed: u64,
    seed: u64,
}

impl RealPseudoRandomNumberGenerator {
    /// Creates a new random number generator.
    ///
    /// Two generators created with the same seed produce exactly the same output.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| Self::generate_seed());
        Self {
            initial_seed: seed,
            seed,
        }
    }

    /// Boxed constructor, usable as an RNG factory.
    pub fn boxed(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
        Box::new(Self::new(seed))
    }

    fn generate_seed() -> u64 {
        let mut rng = rand::rng();
        rng.random()
    }

    /// Linear Congruential Generator (LCRNG).
    fn next_seed(seed: u64) -> u64 {
        const A: u64 = 0x5D588B656C078965;
        const C: u64 = 0x0000000000269EC3;
        seed.wrapping_mul(A).wrapping_add(C)
    }
}

impl PseudoRandomNumberGenerator for RealPseudoRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.seed = Self::next_seed(self.seed);
        // The lower bits are predictable, so only the upper half is handed out.
        self.seed >> 32
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
