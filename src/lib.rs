//! # domination
//!
//! A two-player deck-building card game engine with a scripted AI buyer.
//!
//! ## Design Principles
//!
//! 1. **No I/O in the core**: Every operation returns values; events are
//!    captured in memory for a driver to render.
//!
//! 2. **Injected randomness**: The starting-player choice and every shuffle
//!    go through a `RandomSource`, so games replay exactly from a seed.
//!
//! 3. **Ordered catalog**: The supply iterates in catalog order, which makes
//!    heuristic tie-breaks deterministic.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `cards`: The card type and the fixed catalog
//! - `supply`: Shared finite inventory and the end condition
//! - `zones`: Per-player deck record with draw/discard/hand piles
//! - `strategy`: Purchase policies
//! - `rules`: Final scoring comparison
//! - `game`: Players, the turn controller, event logging

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod strategy;
pub mod supply;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    DominationError, FixedRandom, GameConfig, GameRng, GameRngState, PlayerId, PlayerMap,
    RandomSource, Result, StarterAllotment,
};

pub use crate::cards::{Card, CatalogEntry};

pub use crate::supply::{Supply, SupplyPile};

pub use crate::zones::{CardHandle, Pile, Piles};

pub use crate::strategy::{BestCardHeuristic, PurchasePolicy};

pub use crate::rules::GameResult;

pub use crate::game::{Game, GameEvent, GameLogger, LogEntry, Phase, Player, TurnRecord, VerbosityLevel};
