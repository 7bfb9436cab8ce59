//! Error types for the domination engine.
//!
//! The failure taxonomy is narrow. Only supply lookups and purchases fail
//! during play, and the game controller absorbs both as "no purchase".
//! Configuration and turn-limit errors surface at the outer API.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DominationError {
    #[error("Card not found in supply: {0}")]
    NotFound(String),

    #[error("Card unavailable for purchase: {0}")]
    Unavailable(String),

    #[error("Invalid game configuration: {0}")]
    InvalidConfig(String),

    #[error("Turn limit reached after {0} turns without the game ending")]
    TurnLimitReached(u32),
}

pub type Result<T> = std::result::Result<T, DominationError>;
