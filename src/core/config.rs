//! Game configuration.
//!
//! `GameConfig::default()` is the standard two-player game. Tests and the
//! driver binary adjust it through builder methods or load it from JSON.
//! Missing JSON fields fall back to the standard values.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{DominationError, Result};
use super::player::{PlayerId, PlayerMap};
use crate::cards::{standard_catalog, CatalogEntry, FRAMEWORK};
use crate::game::log::VerbosityLevel;
use crate::game::player::standard_starter;

/// Default target hand size.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Default cap on turns played by `Game::run_to_completion`.
pub const DEFAULT_TURN_LIMIT: u32 = 10_000;

/// A number of copies of one card bought into each starter deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarterAllotment {
    pub card: String,
    pub count: u32,
}

impl StarterAllotment {
    pub fn new(card: impl Into<String>, count: u32) -> Self {
        Self {
            card: card.into(),
            count,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Supply contents in catalog order.
    pub catalog: Vec<CatalogEntry>,

    /// The game ends when this card's supply count hits zero.
    pub end_card: String,

    /// Starter purchases, made in order, per player.
    pub starter_deck: Vec<StarterAllotment>,

    pub hand_size: usize,

    /// Safety cap for `run_to_completion`.
    pub turn_limit: u32,

    pub verbosity: VerbosityLevel,

    pub player_names: PlayerMap<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            catalog: standard_catalog(),
            end_card: FRAMEWORK.to_string(),
            starter_deck: standard_starter(),
            hand_size: DEFAULT_HAND_SIZE,
            turn_limit: DEFAULT_TURN_LIMIT,
            verbosity: VerbosityLevel::default(),
            player_names: PlayerMap::new(|p| p.to_string()),
        }
    }
}

impl GameConfig {
    /// The standard game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DominationError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: Vec<CatalogEntry>) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn with_end_card(mut self, name: impl Into<String>) -> Self {
        self.end_card = name.into();
        self
    }

    #[must_use]
    pub fn with_starter_deck(mut self, starter: Vec<StarterAllotment>) -> Self {
        self.starter_deck = starter;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_turn_limit(mut self, limit: u32) -> Self {
        self.turn_limit = limit;
        self
    }

    #[must_use]
    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.verbosity = verbosity;
        self
    }

    #[must_use]
    pub fn with_player_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        self.player_names[player] = name.into();
        self
    }

    /// Get a catalog entry by card name.
    #[must_use]
    pub fn get_entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.catalog.iter().find(|e| e.card.name() == name)
    }

    /// Check the configuration for inconsistencies.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(DominationError::InvalidConfig(msg));

        if self.catalog.is_empty() {
            return invalid("catalog is empty".to_string());
        }

        let mut seen = FxHashSet::default();
        for entry in &self.catalog {
            if !seen.insert(entry.card.name()) {
                return invalid(format!("duplicate card name '{}'", entry.card.name()));
            }
        }

        if self.get_entry(&self.end_card).is_none() {
            return invalid(format!("end card '{}' is not in the catalog", self.end_card));
        }

        if let Some(missing) = self
            .starter_deck
            .iter()
            .find(|a| self.get_entry(&a.card).is_none())
        {
            return invalid(format!("starter card '{}' is not in the catalog", missing.card));
        }

        if self.hand_size == 0 {
            return invalid("hand size must be at least 1".to_string());
        }

        if self.turn_limit == 0 {
            return invalid("turn limit must be at least 1".to_string());
        }

        Ok(())
    }
}
