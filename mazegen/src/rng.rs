use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The randomness the generator consumes. Anything implementing [`rand::Rng`] qualifies.
pub trait MazeRng {
    /// A uniformly distributed integer in `min..=max`. Returns `min` when `max <= min`.
    fn random_range(&mut self, min: usize, max: usize) -> usize;

    /// `true` with a probability of `percent` in 100.
    fn percent_chance(&mut self, percent: u32) -> bool;
}

impl<R: Rng + ?Sized> MazeRng for R {
    fn random_range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.gen_range(min..=max)
    }

    fn percent_chance(&mut self, percent: u32) -> bool {
        self.gen_range(0..100) < percent
    }
}

/// Upper bound (inclusive) for seeds picked when the caller does not provide one.
pub const MAX_RANDOM_SEED: u64 = 0xff_ffff;

/// A reproducible random source for `seed`.
///
/// ChaCha8 has a fixed, documented output stream, so a seed keeps producing the same maze across
/// `rand` releases and platforms. `StdRng` makes no such promise.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A fresh seed from the thread-local generator.
pub fn random_seed() -> u64 {
    rand::thread_rng().gen_range(0..=MAX_RANDOM_SEED)
}
