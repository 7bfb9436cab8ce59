//! Structured game event logging.
//!
//! The engine performs no I/O. Every notable step is recorded twice:
//!
//! - as a structured `GameEvent` in a persistent history (always kept)
//! - as a formatted `LogEntry` captured in memory, gated by `VerbosityLevel`
//!
//! Drivers decide what to print from the captured entries.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};
use crate::rules::GameResult;

/// Verbosity level for captured log output.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - nothing captured
    Silent = 0,
    /// Minimal - only the game outcome
    Minimal = 1,
    /// Normal - turns and purchases (default)
    #[default]
    Normal = 2,
    /// Verbose - reshuffles and other pile movement
    Verbose = 3,
}

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted {
        first_player: PlayerId,
    },
    TurnStarted {
        turn: u32,
        player: PlayerId,
        hand: Vec<String>,
        coins: u32,
    },
    Purchased {
        player: PlayerId,
        card: String,
    },
    NoAffordableCard {
        player: PlayerId,
    },
    /// The policy picked a card the supply could not hand out.
    PurchaseFailed {
        player: PlayerId,
        card: String,
    },
    Reshuffled {
        player: PlayerId,
    },
    GameOver {
        scores: PlayerMap<u32>,
        result: GameResult,
    },
}

impl GameEvent {
    /// Lowest verbosity at which this event is captured.
    #[must_use]
    pub fn level(&self) -> VerbosityLevel {
        match self {
            GameEvent::GameOver { .. } => VerbosityLevel::Minimal,
            GameEvent::Reshuffled { .. } => VerbosityLevel::Verbose,
            _ => VerbosityLevel::Normal,
        }
    }

    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            GameEvent::GameStarted { .. } | GameEvent::GameOver { .. } => "game",
            GameEvent::TurnStarted { .. } => "turn",
            GameEvent::Purchased { .. }
            | GameEvent::NoAffordableCard { .. }
            | GameEvent::PurchaseFailed { .. } => "purchase",
            GameEvent::Reshuffled { .. } => "deck",
        }
    }

    /// Human-readable message using the given player names.
    #[must_use]
    pub fn describe(&self, names: &PlayerMap<String>) -> String {
        match self {
            GameEvent::GameStarted { first_player } => {
                format!("Starting game; {} goes first", names[*first_player])
            }
            GameEvent::TurnStarted {
                turn,
                player,
                hand,
                coins,
            } => format!(
                "Turn {turn}: {} holds [{}] with {coins} coins",
                names[*player],
                summarize_hand(hand)
            ),
            GameEvent::Purchased { player, card } => format!("{} bought {card}", names[*player]),
            GameEvent::NoAffordableCard { player } => {
                format!("{} has no affordable cards to buy", names[*player])
            }
            GameEvent::PurchaseFailed { player, card } => {
                format!("{} could not buy {card}", names[*player])
            }
            GameEvent::Reshuffled { player } => {
                format!("{} reshuffled discard into draw", names[*player])
            }
            GameEvent::GameOver { scores, result } => {
                let outcome = match result {
                    GameResult::Winner(p) => format!("{} wins", names[*p]),
                    GameResult::Tie => "it's a tie".to_string(),
                };
                format!(
                    "Game over: {} {} AP, {} {} AP; {outcome}",
                    names[PlayerId::FIRST],
                    scores[PlayerId::FIRST],
                    names[PlayerId::SECOND],
                    scores[PlayerId::SECOND],
                )
            }
        }
    }
}

/// Group card names as "Bitcoin x3, Method x2", in order of first appearance.
fn summarize_hand(hand: &[String]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for name in hand {
        match counts.iter_mut().find(|(n, _)| *n == name.as_str()) {
            Some((_, count)) => *count += 1,
            None => counts.push((name.as_str(), 1)),
        }
    }

    counts
        .iter()
        .map(|(name, count)| format!("{name} x{count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A captured log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    pub category: &'static str,
    pub message: String,
}

/// Event recorder with in-memory capture.
#[derive(Debug, Clone, Default)]
pub struct GameLogger {
    verbosity: VerbosityLevel,
    history: Vector<GameEvent>,
    entries: Vec<LogEntry>,
}

impl GameLogger {
    #[must_use]
    pub fn new(verbosity: VerbosityLevel) -> Self {
        Self {
            verbosity,
            history: Vector::new(),
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    /// Record an event, capturing a formatted entry if verbosity allows.
    pub fn record(&mut self, event: GameEvent, names: &PlayerMap<String>) {
        let level = event.level();
        if self.verbosity != VerbosityLevel::Silent && level <= self.verbosity {
            self.entries.push(LogEntry {
                level,
                category: event.category(),
                message: event.describe(names),
            });
        }
        self.history.push_back(event);
    }

    /// Every event recorded so far, regardless of verbosity.
    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    /// Captured entries.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Take the captured entries, leaving the history intact.
    pub fn drain_entries(&mut self) -> Vec<LogEntry> {
        std::mem::take(&mut self.entries)
    }
}
