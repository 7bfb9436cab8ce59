//! Domination - command-line driver
//!
//! Runs seeded AI-vs-AI games and prints the captured game log or a
//! win/tie tally.

use anyhow::{Context, Result};
use clap::Parser;
use domination::{Game, GameConfig, GameResult, GameRng, PlayerId, VerbosityLevel};
use std::path::PathBuf;

/// Verbosity level (accepts names or numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "domination")]
#[command(about = "Two-player deck-building game between scripted AI buyers", long_about = None)]
struct Cli {
    /// Seed for the first game
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of games to play; more than one prints a tally instead of a log
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// JSON game configuration (missing fields use the standard game)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log verbosity: silent, minimal, normal, verbose (or 0-3)
    #[arg(long, short = 'v')]
    verbosity: Option<VerbosityArg>,
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GameConfig::from_json(&json)?
        }
        None => GameConfig::default(),
    };

    if let Some(VerbosityArg(level)) = cli.verbosity {
        config.verbosity = level;
    }
    Ok(config)
}

fn play_single(config: GameConfig, seed: u64) -> Result<()> {
    let mut game = Game::new(config, GameRng::new(seed))?;
    let result = game.run_to_completion();

    for entry in game.logger_mut().drain_entries() {
        println!("{}", entry.message);
    }
    let result = result?;

    let scores = game.final_scores();
    for player in PlayerId::all() {
        println!(
            "{} Automation Points: {}",
            game.player(player).name(),
            scores[player]
        );
    }
    match result {
        GameResult::Winner(p) => println!("{} wins!", game.player(p).name()),
        GameResult::Tie => println!("It's a tie!"),
    }
    println!("Turns played: {}", game.turns_played());
    Ok(())
}

fn play_many(config: GameConfig, seed: u64, games: u32) -> Result<()> {
    let root = GameRng::new(seed);
    let mut wins = [0u32; 2];
    let mut ties = 0u32;
    let mut total_turns = 0u64;

    for i in 0..games {
        let config = config.clone().with_verbosity(VerbosityLevel::Silent);
        let mut game = Game::new(config, root.for_context(&format!("game-{i}")))?;

        match game.run_to_completion().with_context(|| format!("game {i}"))? {
            GameResult::Winner(p) => wins[p.index()] += 1,
            GameResult::Tie => ties += 1,
        }
        total_turns += u64::from(game.turns_played());
    }

    for player in PlayerId::all() {
        println!("{}: {} wins", config.player_names[player], wins[player.index()]);
    }
    println!("Ties: {ties}");
    println!(
        "Average turns: {:.1}",
        total_turns as f64 / f64::from(games.max(1))
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.games > 1 {
        play_many(config, cli.seed, cli.games)
    } else {
        play_single(config, cli.seed)
    }
}
