//! Injectable randomness for turn order and deck shuffling.
//!
//! The engine never reaches for an ambient generator. Everything random
//! goes through a [`RandomSource`] handed to the game at construction:
//!
//! - **`GameRng`**: seeded ChaCha8, serializable state, derived streams
//! - **`FixedRandom`**: deterministic stub that never permutes
//!
//! ```
//! use domination::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut xs = vec![1, 2, 3, 4, 5];
//! let mut ys = xs.clone();
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//!
//! // Same seed, same permutation
//! assert_eq!(xs, ys);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Source of the only two random decisions the game makes.
pub trait RandomSource {
    /// Choose one of two outcomes with equal probability.
    fn coin_flip(&mut self) -> bool;

    /// Apply a uniformly random permutation to `items`.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while keeping a stable, portable sequence
/// for a given seed.
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

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// so e.g. a benchmark can give each simulated game its own stream.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture and restore cost the same
/// regardless of how far the stream has advanced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Deterministic stand-in for tests.
///
/// `shuffle` leaves the order untouched and `coin_flip` always returns
/// the configured value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedRandom {
    flip: bool,
}

impl FixedRandom {
    #[must_use]
    pub const fn new(flip: bool) -> Self {
        Self { flip }
    }
}

impl RandomSource for FixedRandom {
    fn coin_flip(&mut self) -> bool {
        self.flip
    }

    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(rng: &mut GameRng) -> Vec<bool> {
        (0..32).map(|_| rng.coin_flip()).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(sample(&mut rng1), sample(&mut rng2));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(sample(&mut rng1), sample(&mut rng2));
    }

    #[test]
    fn test_context_streams() {
        let rng = GameRng::new(42);

        let mut a = rng.for_context("game-1");
        let mut b = rng.for_context("game-2");
        let mut a2 = GameRng::new(42).for_context("game-1");

        let seq_a = sample(&mut a);
        assert_ne!(seq_a, sample(&mut b));
        assert_eq!(seq_a, sample(&mut a2));
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=20).collect();
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (overwhelmingly likely for 20 items)
        assert_ne!(data, original);
        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_coin_flip_takes_both_values() {
        let mut rng = GameRng::new(7);
        let flips = sample(&mut rng);

        assert!(flips.iter().any(|&f| f));
        assert!(flips.iter().any(|&f| !f));
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        let _ = sample(&mut rng);

        let state = rng.state();
        let expected = sample(&mut rng);

        let mut restored = GameRng::from_state(&state);
        assert_eq!(sample(&mut restored), expected);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_fixed_random() {
        let mut rng = FixedRandom::new(true);
        let mut data = vec![3, 1, 2];

        rng.shuffle(&mut data);

        assert_eq!(data, vec![3, 1, 2]);
        assert!(rng.coin_flip());
        assert!(!FixedRandom::new(false).coin_flip());
    }
}
