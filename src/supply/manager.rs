//! The shared supply of purchasable cards.
//!
//! The `Supply` keeps one pile per catalog entry, in catalog order, plus a
//! name index for lookups. Counts only ever decrease, and only through a
//! successful `purchase`. The end-of-game check reads the end card's pile
//! on every call.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{standard_catalog, Card, CatalogEntry, FRAMEWORK};
use crate::core::{DominationError, GameConfig, Result};

/// A card definition and how many copies remain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyPile {
    pub card: Card,
    pub remaining: u32,
}

/// Finite, ordered inventory of card definitions.
///
/// ## Usage
///
/// ```
/// use domination::supply::Supply;
/// use domination::cards::FRAMEWORK;
///
/// let mut supply = Supply::standard();
///
/// let card = supply.purchase(FRAMEWORK).unwrap();
/// assert_eq!(card.name(), FRAMEWORK);
/// assert_eq!(supply.remaining(FRAMEWORK), Some(7));
/// assert!(!supply.is_game_over());
/// ```
#[derive(Clone, Debug)]
pub struct Supply {
    piles: Vec<SupplyPile>,
    index: FxHashMap<String, usize>,
    end_card: String,
}

impl Supply {
    /// Build a supply from catalog entries.
    ///
    /// Later duplicates of a name are unreachable by lookup; use
    /// `from_config` to reject them up front.
    #[must_use]
    pub fn new(catalog: Vec<CatalogEntry>, end_card: impl Into<String>) -> Self {
        let mut index = FxHashMap::default();
        let piles: Vec<SupplyPile> = catalog
            .into_iter()
            .map(|entry| SupplyPile {
                card: entry.card,
                remaining: entry.quantity,
            })
            .collect();

        for (i, pile) in piles.iter().enumerate() {
            index.entry(pile.card.name().to_string()).or_insert(i);
        }

        Self {
            piles,
            index,
            end_card: end_card.into(),
        }
    }

    /// The standard six-card supply.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_catalog(), FRAMEWORK)
    }

    /// Build a supply from a validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.catalog.clone(), config.end_card.clone()))
    }

    fn pile(&self, name: &str) -> Option<&SupplyPile> {
        self.index.get(name).map(|&i| &self.piles[i])
    }

    /// Get a card definition by name.
    pub fn lookup(&self, name: &str) -> Result<&Card> {
        self.pile(name)
            .map(|p| &p.card)
            .ok_or_else(|| DominationError::NotFound(name.to_string()))
    }

    /// Remaining count for a card, or `None` if unknown.
    #[must_use]
    pub fn remaining(&self, name: &str) -> Option<u32> {
        self.pile(name).map(|p| p.remaining)
    }

    /// True iff the card exists and at least one copy remains.
    #[must_use]
    pub fn is_available(&self, name: &str) -> bool {
        self.remaining(name).is_some_and(|n| n > 0)
    }

    /// Take one copy of a card out of the supply.
    ///
    /// Fails with `Unavailable` for unknown or depleted cards, leaving every
    /// count unchanged.
    pub fn purchase(&mut self, name: &str) -> Result<Card> {
        let pile = self
            .index
            .get(name)
            .map(|&i| &mut self.piles[i])
            .filter(|p| p.remaining > 0)
            .ok_or_else(|| DominationError::Unavailable(name.to_string()))?;

        pile.remaining -= 1;
        Ok(pile.card.clone())
    }

    /// Snapshot of every pile with copies left, in catalog order.
    #[must_use]
    pub fn available_catalog(&self) -> Vec<SupplyPile> {
        self.piles.iter().filter(|p| p.remaining > 0).cloned().collect()
    }

    /// All piles in catalog order, including empty ones.
    #[must_use]
    pub fn piles(&self) -> &[SupplyPile] {
        &self.piles
    }

    /// Name of the card whose exhaustion ends the game.
    #[must_use]
    pub fn end_card(&self) -> &str {
        &self.end_card
    }

    /// True iff the end card's pile is exactly empty.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.remaining(&self.end_card) == Some(0)
    }
}
