//! Game flow: players, the turn controller, and event logging.
//!
//! ## Key Types
//!
//! - `Game`: Two-player controller, generic over random source and policy
//! - `Player`: Name plus piles, with starter-deck setup and turn cycling
//! - `TurnRecord`: What one call to `play_turn` did
//! - `GameLogger` / `GameEvent`: Structured history and captured log lines

pub mod controller;
pub mod log;
pub mod player;

pub use controller::{Game, Phase, TurnRecord};
pub use log::{GameEvent, GameLogger, LogEntry, VerbosityLevel};
pub use player::{standard_starter, Player};
