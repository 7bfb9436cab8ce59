//! AI purchase strategies.
//!
//! - `PurchasePolicy`: The seam the game controller calls each buy phase
//! - `BestCardHeuristic`: Deterministic "most valuable affordable card" buyer

pub mod heuristic;

pub use heuristic::{BestCardHeuristic, PurchasePolicy, POINT_CARD_WEIGHT};
