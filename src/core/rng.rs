//! Deterministic random number generation for invader supply.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical invader lines
//! - **Forkable**: Each game attempt in a session gets its own stream
//!
//! ```
//! use number_match::core::GameRng;
//!
//! let mut session = GameRng::new(42);
//! let mut first_game = session.fork();
//!
//! let digit = first_game.gen_digit();
//! assert!(digit <= 9);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing the invader queue.
///
/// Uses ChaCha8 so a seed fully reproduces a game.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// The driver forks once per game attempt so replaying a session seed
    /// reproduces every attempt.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Uniform invader digit in `0..=9`.
    pub fn gen_digit(&mut self) -> u8 {
        self.inner.gen_range(0..10)
    }
}
