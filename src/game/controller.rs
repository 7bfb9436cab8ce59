//! The two-player game controller.
//!
//! A `Game` owns both players, the supply, the random source and the
//! purchase policy. Each call to `play_turn` runs one full turn for the
//! current player, in this order:
//!
//! 1. Count the coins in hand
//! 2. Ask the policy for a card among the affordable, available piles
//! 3. Buy it (a failed purchase is a no-op, never an abort)
//! 4. Cleanup, then end the turn (reshuffle if needed, deal)
//! 5. Pass the turn to the other player
//!
//! The game is over as soon as the supply's end card runs out; the check
//! is re-evaluated after every turn rather than cached.

use crate::cards::Card;
use crate::core::{
    DominationError, GameConfig, GameRng, PlayerId, PlayerMap, RandomSource, Result,
};
use crate::rules::GameResult;
use crate::strategy::{BestCardHeuristic, PurchasePolicy};
use crate::supply::Supply;

use super::log::{GameEvent, GameLogger};
use super::player::Player;

/// The controller's two states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// A player's turn can be played.
    Active,
    /// Terminal: the end card is exhausted.
    Over,
}

/// What happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    /// 1-based turn number across both players.
    pub turn: u32,
    pub player: PlayerId,
    /// Coins in hand at the start of the buy phase.
    pub coins: u32,
    /// The policy's pick, if any.
    pub chosen: Option<Card>,
    /// The copy actually added to the player's deck.
    pub bought: Option<Card>,
    /// Whether ending the turn reshuffled the discard pile.
    pub reshuffled: bool,
}

/// A game in progress.
///
/// ## Example
///
/// ```
/// use domination::core::{GameConfig, GameRng};
/// use domination::game::Game;
///
/// let mut game = Game::new(GameConfig::default(), GameRng::new(42)).unwrap();
///
/// while !game.is_game_over() {
///     game.play_turn();
/// }
///
/// let scores = game.final_scores();
/// let result = game.result().unwrap();
/// println!("{scores:?} -> {result:?}");
/// ```
pub struct Game<R: RandomSource = GameRng, P: PurchasePolicy = BestCardHeuristic> {
    config: GameConfig,
    supply: Supply,
    players: PlayerMap<Player>,
    current: PlayerId,
    policy: P,
    rng: R,
    turns_played: u32,
    logger: GameLogger,
}

impl Game<GameRng> {
    /// Standard game from a seed.
    pub fn seeded(seed: u64) -> Result<Self> {
        Self::new(GameConfig::default(), GameRng::new(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game driven by the best-card heuristic.
    pub fn new(config: GameConfig, rng: R) -> Result<Self> {
        Self::with_policy(config, rng, BestCardHeuristic)
    }
}

impl<R: RandomSource, P: PurchasePolicy> Game<R, P> {
    /// Create a game with a custom purchase policy.
    ///
    /// Both starter decks are bought (first player first), then the
    /// starting player is chosen with a coin flip.
    pub fn with_policy(config: GameConfig, mut rng: R, policy: P) -> Result<Self> {
        let mut supply = Supply::from_config(&config)?;

        let mut players =
            PlayerMap::new(|p| Player::new(config.player_names[p].clone(), config.hand_size));
        for player in PlayerId::all() {
            players[player].setup_starter_deck_with(&mut supply, &config.starter_deck, &mut rng);
        }

        let current = if rng.coin_flip() {
            PlayerId::FIRST
        } else {
            PlayerId::SECOND
        };

        let mut game = Self {
            logger: GameLogger::new(config.verbosity),
            config,
            supply,
            players,
            current,
            policy,
            rng,
            turns_played: 0,
        };

        game.log(GameEvent::GameStarted {
            first_player: current,
        });
        if game.is_game_over() {
            game.log_game_over();
        }

        Ok(game)
    }

    fn log(&mut self, event: GameEvent) {
        self.logger.record(event, &self.config.player_names);
    }

    fn log_game_over(&mut self) {
        let scores = self.final_scores();
        let result = GameResult::from_scores(&scores);
        self.log(GameEvent::GameOver { scores, result });
    }

    /// Play one turn for the current player.
    ///
    /// Returns `None` without touching any state if the game is already over.
    pub fn play_turn(&mut self) -> Option<TurnRecord> {
        if self.is_game_over() {
            return None;
        }

        self.turns_played += 1;
        let turn = self.turns_played;
        let player = self.current;

        let coins = self.players[player].available_coins();
        let hand = self.players[player]
            .hand()
            .map(|c| c.name().to_string())
            .collect();
        self.log(GameEvent::TurnStarted {
            turn,
            player,
            hand,
            coins,
        });

        let catalog = self.supply.available_catalog();
        let chosen = self
            .policy
            .choose(coins, &catalog)
            .map(|pile| pile.card.clone());

        let bought = match &chosen {
            Some(card) => match self.buy(card, coins) {
                Ok(copy) => {
                    self.players[player].append(copy.clone());
                    self.log(GameEvent::Purchased {
                        player,
                        card: copy.name().to_string(),
                    });
                    Some(copy)
                }
                Err(_) => {
                    self.log(GameEvent::PurchaseFailed {
                        player,
                        card: card.name().to_string(),
                    });
                    None
                }
            },
            None => {
                self.log(GameEvent::NoAffordableCard { player });
                None
            }
        };

        self.players[player].cleanup();
        let reshuffled = self.players[player].end_turn(&mut self.rng);
        if reshuffled {
            self.log(GameEvent::Reshuffled { player });
        }

        self.current = player.other();

        if self.is_game_over() {
            self.log_game_over();
        }

        Some(TurnRecord {
            turn,
            player,
            coins,
            chosen,
            bought,
            reshuffled,
        })
    }

    /// Purchase from the supply, enforcing affordability for any policy.
    fn buy(&mut self, card: &Card, coins: u32) -> Result<Card> {
        if card.cost() > coins {
            return Err(DominationError::Unavailable(card.name().to_string()));
        }
        self.supply.purchase(card.name())
    }

    /// Play turns until the game ends.
    ///
    /// Fails with `TurnLimitReached` if the configured turn limit is hit
    /// before the end card runs out.
    pub fn run_to_completion(&mut self) -> Result<GameResult> {
        while !self.is_game_over() {
            if self.turns_played >= self.config.turn_limit {
                return Err(DominationError::TurnLimitReached(self.turns_played));
            }
            self.play_turn();
        }

        Ok(GameResult::from_scores(&self.final_scores()))
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_game_over() {
            Phase::Over
        } else {
            Phase::Active
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.supply.is_game_over()
    }

    /// Both players' automation points.
    #[must_use]
    pub fn final_scores(&self) -> PlayerMap<u32> {
        self.players.map(Player::automation_points)
    }

    /// The outcome, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_game_over()
            .then(|| GameResult::from_scores(&self.final_scores()))
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn other_player(&self) -> &Player {
        &self.players[self.current.other()]
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    #[must_use]
    pub fn logger(&self) -> &GameLogger {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut GameLogger {
        &mut self.logger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CatalogEntry, BITCOIN, FRAMEWORK, METHOD};
    use crate::core::{FixedRandom, StarterAllotment};
    use crate::supply::SupplyPile;
    use crate::zones::Pile;

    #[test]
    fn test_new_game_setup() {
        let game = Game::new(GameConfig::default(), FixedRandom::new(true)).unwrap();

        assert_eq!(game.current_player_id(), PlayerId::FIRST);
        assert_eq!(game.phase(), Phase::Active);
        assert_eq!(game.supply().remaining(BITCOIN), Some(46));
        assert_eq!(game.supply().remaining(METHOD), Some(8));
        for player in PlayerId::all() {
            assert_eq!(game.player(player).deck().len(), 10);
            assert_eq!(game.player(player).hand_len(), 5);
        }
        assert_eq!(game.turns_played(), 0);
        assert!(game.result().is_none());
    }

    #[test]
    fn test_coin_flip_picks_starting_player() {
        let game = Game::new(GameConfig::default(), FixedRandom::new(false)).unwrap();
        assert_eq!(game.current_player_id(), PlayerId::SECOND);
        assert_eq!(game.other_player().name(), "Player 1");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::default().with_end_card("Nothing");
        assert!(matches!(
            Game::new(config, FixedRandom::default()),
            Err(DominationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_play_turn_with_fixed_order() {
        let mut game = Game::new(GameConfig::default(), FixedRandom::new(true)).unwrap();

        // Unshuffled opening hand is 3 Methods and 2 Bitcoins: 2 coins buys a Method.
        let record = game.play_turn().unwrap();

        assert_eq!(record.turn, 1);
        assert_eq!(record.player, PlayerId::FIRST);
        assert_eq!(record.coins, 2);
        assert_eq!(record.bought.as_ref().map(Card::name), Some(METHOD));
        assert!(!record.reshuffled);
        assert_eq!(game.current_player_id(), PlayerId::SECOND);
        assert_eq!(game.player(PlayerId::FIRST).deck().len(), 11);
        assert_eq!(game.supply().remaining(METHOD), Some(7));

        // Second hand is the remaining 5 Bitcoins.
        let first = game.player(PlayerId::FIRST);
        assert_eq!(first.available_coins(), 5);
        assert_eq!(first.piles().len(Pile::Discard), 6);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::seeded(9).unwrap();
        let starter = game.current_player_id();

        let players: Vec<_> = (0..4).filter_map(|_| game.play_turn()).map(|r| r.player).collect();

        assert_eq!(players, vec![starter, starter.other(), starter, starter.other()]);
    }

    #[test]
    fn test_game_over_immediately_when_end_card_starts_empty() {
        let mut catalog = crate::cards::standard_catalog();
        catalog[2].quantity = 0;
        let config = GameConfig::default().with_catalog(catalog);

        let mut game = Game::new(config, FixedRandom::default()).unwrap();

        assert_eq!(game.phase(), Phase::Over);
        assert!(game.play_turn().is_none());
        assert_eq!(game.turns_played(), 0);
        assert_eq!(game.result(), Some(GameResult::Tie));
    }

    #[test]
    fn test_last_end_card_ends_game() {
        let config = GameConfig::default().with_catalog(vec![
            CatalogEntry::new(Card::coin(BITCOIN, 0, 4), 20),
            CatalogEntry::new(Card::point(METHOD, 2, 1), 10),
            CatalogEntry::new(Card::point(FRAMEWORK, 8, 6), 1),
        ]);
        let mut game = Game::new(config, FixedRandom::new(true)).unwrap();

        // 7 Bitcoins worth 4 each: any hand with two of them affords the Framework.
        let record = game.play_turn().unwrap();

        assert_eq!(record.bought.as_ref().map(Card::name), Some(FRAMEWORK));
        assert!(game.is_game_over());
        assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::FIRST)));
        assert!(game.play_turn().is_none());
    }

    struct Overspender;

    impl PurchasePolicy for Overspender {
        fn choose<'a>(&self, _coins: u32, catalog: &'a [SupplyPile]) -> Option<&'a SupplyPile> {
            catalog.iter().max_by_key(|p| p.card.cost())
        }
    }

    #[test]
    fn test_unaffordable_choice_is_a_no_op() {
        let mut game =
            Game::with_policy(GameConfig::default(), FixedRandom::new(true), Overspender).unwrap();

        let record = game.play_turn().unwrap();

        assert_eq!(record.chosen.as_ref().map(Card::name), Some(FRAMEWORK));
        assert!(record.bought.is_none());
        assert_eq!(game.supply().remaining(FRAMEWORK), Some(8));
        assert_eq!(game.player(PlayerId::FIRST).deck().len(), 10);
        assert!(game
            .logger()
            .history()
            .iter()
            .any(|e| matches!(e, GameEvent::PurchaseFailed { .. })));
    }

    #[test]
    fn test_no_affordable_card() {
        let config = GameConfig::default()
            .with_catalog(vec![
                CatalogEntry::new(Card::coin(BITCOIN, 0, 0), 20),
                CatalogEntry::new(Card::point(FRAMEWORK, 8, 6), 8),
            ])
            .with_starter_deck(vec![StarterAllotment::new(BITCOIN, 5)]);
        let mut game = Game::new(config, FixedRandom::new(true)).unwrap();

        // Bitcoin is still free, so a zero-coin hand buys one.
        let record = game.play_turn().unwrap();
        assert_eq!(record.bought.as_ref().map(Card::name), Some(BITCOIN));

        let config = GameConfig::default()
            .with_catalog(vec![CatalogEntry::new(Card::point(FRAMEWORK, 8, 6), 8)])
            .with_starter_deck(Vec::new());
        let mut game = Game::new(config, FixedRandom::new(true)).unwrap();

        let record = game.play_turn().unwrap();
        assert!(record.chosen.is_none());
        assert!(game
            .logger()
            .history()
            .iter()
            .any(|e| matches!(e, GameEvent::NoAffordableCard { .. })));
    }

    #[test]
    fn test_turn_limit() {
        let config = GameConfig::default()
            .with_catalog(vec![CatalogEntry::new(Card::point(FRAMEWORK, 8, 6), 8)])
            .with_starter_deck(Vec::new())
            .with_turn_limit(12);
        let mut game = Game::new(config, FixedRandom::new(true)).unwrap();

        assert_eq!(
            game.run_to_completion(),
            Err(DominationError::TurnLimitReached(12))
        );
        assert_eq!(game.turns_played(), 12);
    }

    #[test]
    fn test_run_to_completion() {
        let mut game = Game::seeded(42).unwrap();

        let result = game.run_to_completion().unwrap();

        assert!(game.is_game_over());
        assert_eq!(game.supply().remaining(FRAMEWORK), Some(0));
        assert_eq!(Some(result), game.result());
        assert_eq!(result, GameResult::from_scores(&game.final_scores()));
        assert!(matches!(
            game.logger().history().back(),
            Some(GameEvent::GameOver { .. })
        ));
    }
}
