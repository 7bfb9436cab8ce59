//! Full-game tests.
//!
//! These tests drive complete seeded games through the public API:
//! - Games terminate with the Framework pile exhausted
//! - The reported outcome matches the final scores
//! - Identical seeds replay identically
//! - Card conservation between the supply and both decks

use domination::cards::{standard_catalog, BITCOIN, FRAMEWORK};
use domination::{
    BestCardHeuristic, Card, FixedRandom, Game, GameConfig, GameEvent, GameResult, GameRng,
    PlayerId, PurchasePolicy, Supply, TurnRecord, VerbosityLevel,
};

fn play_out(seed: u64) -> (Game, Vec<TurnRecord>) {
    let mut game = Game::seeded(seed).unwrap();
    let mut records = Vec::new();
    while let Some(record) = game.play_turn() {
        records.push(record);
        assert!(records.len() < 10_000, "game with seed {seed} did not terminate");
    }
    (game, records)
}

/// Test that seeded games run to the end condition.
#[test]
fn test_games_terminate() {
    for seed in 0..20 {
        let (game, records) = play_out(seed);

        assert!(game.is_game_over());
        assert_eq!(game.supply().remaining(FRAMEWORK), Some(0));
        assert_eq!(records.len() as u32, game.turns_played());

        let last = records.last().unwrap();
        assert_eq!(last.bought.as_ref().map(Card::name), Some(FRAMEWORK));
    }
}

/// Test that the outcome is decided by automation points alone.
#[test]
fn test_result_matches_scores() {
    for seed in 0..20 {
        let (game, _) = play_out(seed);
        let scores = game.final_scores();

        let expected = match scores[PlayerId::FIRST].cmp(&scores[PlayerId::SECOND]) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Tie,
        };
        assert_eq!(game.result(), Some(expected));

        for player in PlayerId::all() {
            let points: u32 = game.player(player).deck().iter().map(Card::score_value).sum();
            assert_eq!(scores[player], points);
        }
    }
}

/// Test that the same seed replays the same game.
#[test]
fn test_seeded_games_are_deterministic() {
    let (a, records_a) = play_out(1234);
    let (b, records_b) = play_out(1234);

    assert_eq!(records_a, records_b);
    assert_eq!(a.final_scores(), b.final_scores());
    assert_eq!(a.current_player_id(), b.current_player_id());
    assert_eq!(a.logger().history(), b.logger().history());
}

/// Test that no card is created or lost over a whole game.
#[test]
fn test_cards_are_conserved() {
    let (game, _) = play_out(77);
    let initial = Supply::standard();

    for (pile, start) in game.supply().piles().iter().zip(initial.piles()) {
        let name = pile.card.name();
        let owned = PlayerId::all()
            .flat_map(|p| game.player(p).deck())
            .filter(|c| c.name() == name)
            .count() as u32;

        assert_eq!(pile.remaining + owned, start.remaining, "{name} not conserved");
    }

    for player in PlayerId::all() {
        assert!(game.player(player).piles().is_consistent());
        // Hands only run short when the draw pile runs out mid-deal.
        let hand = game.player(player).hand_len();
        assert!((1..=5).contains(&hand));
    }
}

/// Test that every purchase was affordable from the hand that made it.
#[test]
fn test_purchases_are_affordable() {
    let (_, records) = play_out(5);

    for record in &records {
        if let Some(card) = &record.bought {
            assert!(card.cost() <= record.coins);
        }
        assert_eq!(record.chosen, record.bought);
    }
}

/// Test the heuristic against the live catalog with eight coins.
#[test]
fn test_heuristic_prefers_points_with_eight_coins() {
    let supply = Supply::standard();
    let catalog = supply.available_catalog();

    let pick = BestCardHeuristic.choose(8, &catalog).unwrap();
    assert_eq!(pick.card.name(), FRAMEWORK);

    let pick = BestCardHeuristic.choose(1, &catalog).unwrap();
    assert_eq!(pick.card.name(), BITCOIN);
}

/// Test the event log of a full game.
#[test]
fn test_event_history() {
    let config = GameConfig::default().with_verbosity(VerbosityLevel::Minimal);
    let mut game = Game::new(config, GameRng::new(8)).unwrap();
    let result = game.run_to_completion().unwrap();

    let history = game.logger().history();
    assert!(matches!(history.front(), Some(GameEvent::GameStarted { .. })));
    assert!(matches!(
        history.back(),
        Some(GameEvent::GameOver { result: r, .. }) if *r == result
    ));

    let turns = history
        .iter()
        .filter(|e| matches!(e, GameEvent::TurnStarted { .. }))
        .count() as u32;
    assert_eq!(turns, game.turns_played());

    // Minimal verbosity captures only the outcome line.
    assert_eq!(game.logger().entries().len(), 1);
    assert!(game.logger().entries()[0].message.starts_with("Game over"));
}

/// Test a game loaded from JSON with renamed players.
#[test]
fn test_json_configured_game() {
    let json = r#"{
        "player_names": { "data": ["Ada", "Grace"] },
        "verbosity": "Silent"
    }"#;
    let config = GameConfig::from_json(json).unwrap();

    let mut game = Game::new(config, FixedRandom::new(false)).unwrap();

    assert_eq!(game.current_player().name(), "Grace");
    assert_eq!(game.other_player().name(), "Ada");
    assert!(game.play_turn().is_some());
    assert!(game.logger().entries().is_empty());
}

/// A policy that never buys anything.
struct Abstainer;

impl PurchasePolicy for Abstainer {
    fn choose<'a>(
        &self,
        _coins: u32,
        _catalog: &'a [domination::SupplyPile],
    ) -> Option<&'a domination::SupplyPile> {
        None
    }
}

/// Test that the turn limit stops a game that can never end.
#[test]
fn test_turn_limit_stops_stalled_game() {
    let config = GameConfig::default()
        .with_catalog(standard_catalog())
        .with_turn_limit(40);
    let mut game = Game::with_policy(config, GameRng::new(3), Abstainer).unwrap();

    assert!(game.run_to_completion().is_err());
    assert_eq!(game.turns_played(), 40);
    assert!(!game.is_game_over());
    assert!(game.result().is_none());
}
