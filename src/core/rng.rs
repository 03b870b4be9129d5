//! Deterministic random number generation with named streams.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for different purposes, so the
//!   opponent's fallback draws never shift the next round's goal
//!
//! ```
//! use nim_race::core::GameRng;
//!
//! let root = GameRng::new(42);
//! let mut setup = root.for_context("setup");
//! let mut again = GameRng::new(42).for_context("setup");
//!
//! assert_eq!(setup.gen_range_inclusive(40..=70), again.gen_range_inclusive(40..=70));
//! ```

use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for game setup and opponent play.
///
/// Uses ChaCha8 for speed while keeping sequences reproducible across
/// platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self::new(context_seed)
    }

    /// Seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a uniform integer in the given inclusive range.
    ///
    /// An empty range yields its start.
    pub fn gen_range_inclusive(&mut self, range: RangeInclusive<u32>) -> u32 {
        if range.is_empty() {
            return *range.start();
        }
        self.inner.gen_range(range)
    }
}
