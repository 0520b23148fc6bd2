use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Exclusive upper bound of a single channel step.
pub const MAX_STEP: u8 = 10;

/// Source of the random draws used while frying.
///
/// Owned by the fryer; nothing here touches global random state.
pub trait NoiseSource {
    /// `true` means heads: the step is added to the channel.
    fn flip(&mut self) -> bool;
    /// A step in `0..MAX_STEP`.
    fn step(&mut self) -> u8;
}

/// [`NoiseSource`] backed by any [`Rng`].
pub struct RngNoise<R>(R);

impl<R: Rng> RngNoise<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngNoise<Xoshiro256PlusPlus> {
    pub fn seeded(seed: u64) -> Self {
        Self(Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl<R: Rng> NoiseSource for RngNoise<R> {
    fn flip(&mut self) -> bool {
        self.0.random_bool(0.5)
    }

    fn step(&mut self) -> u8 {
        self.0.random_range(0..MAX_STEP)
    }
}

/// Seed taken from the wall clock, used when no explicit seed is requested.
pub fn clock_seed() -> u64 {
    let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
    // Only the low 64 bits change between runs; the rest is dropped on purpose.
    (nanos & u64::MAX as i128) as u64
}
