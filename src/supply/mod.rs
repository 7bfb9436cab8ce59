//! Supply system: the shared, finite card inventory.
//!
//! ## Key Types
//!
//! - `Supply`: Ordered piles with purchase and availability queries
//! - `SupplyPile`: One card definition and its remaining count
//!
//! The supply also owns the termination condition: the game is over once
//! the end card's pile is empty.

pub mod manager;

pub use manager::{Supply, SupplyPile};
