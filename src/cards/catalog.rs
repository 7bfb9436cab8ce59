//! The fixed card catalog.
//!
//! Three point-card tiers and three coin-card tiers, listed in catalog
//! order. That order is what the supply iterates and what breaks ties
//! in the purchase heuristic.

use serde::{Deserialize, Serialize};

use super::card::Card;

pub const METHOD: &str = "Method";
pub const MODULE: &str = "Module";
pub const FRAMEWORK: &str = "Framework";
pub const BITCOIN: &str = "Bitcoin";
pub const ETHEREUM: &str = "Ethereum";
pub const DOGECOIN: &str = "Dogecoin";

/// A card definition together with its starting supply quantity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub card: Card,
    pub quantity: u32,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(card: Card, quantity: u32) -> Self {
        Self { card, quantity }
    }
}

pub fn method() -> Card {
    Card::point(METHOD, 2, 1)
}

pub fn module() -> Card {
    Card::point(MODULE, 5, 3)
}

pub fn framework() -> Card {
    Card::point(FRAMEWORK, 8, 6)
}

pub fn bitcoin() -> Card {
    Card::coin(BITCOIN, 0, 1)
}

pub fn ethereum() -> Card {
    Card::coin(ETHEREUM, 3, 2)
}

pub fn dogecoin() -> Card {
    Card::coin(DOGECOIN, 6, 3)
}

/// The standard catalog with starting quantities, in catalog order.
#[must_use]
pub fn standard_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(method(), 14),
        CatalogEntry::new(module(), 8),
        CatalogEntry::new(framework(), 8),
        CatalogEntry::new(bitcoin(), 60),
        CatalogEntry::new(ethereum(), 40),
        CatalogEntry::new(dogecoin(), 30),
    ]
}
