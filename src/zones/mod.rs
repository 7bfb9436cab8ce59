//! Zone system for owned cards.
//!
//! Each player owns a `Piles`: an append-only deck record partitioned into
//! draw, discard and hand piles.
//!
//! ## Key Types
//!
//! - `Piles`: Deck record plus the three piles, with dealing and reshuffling
//! - `Pile`: Which of the three piles a card is in
//! - `CardHandle`: Stable reference to one owned card

pub mod piles;

pub use piles::{CardHandle, Pile, Piles};
