//! Core engine types: players, RNG, configuration, errors.
//!
//! This module holds the building blocks every other module uses.
//! Nothing in here knows about piles, the supply, or turn flow.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, StarterAllotment, DEFAULT_HAND_SIZE, DEFAULT_TURN_LIMIT};
pub use error::{DominationError, Result};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{FixedRandom, GameRng, GameRngState, RandomSource};
