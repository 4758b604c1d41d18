//! Headless batch runner.
//!
//! Drives the real `TurnEngine` through a `NullGateway`, completing every
//! suspension immediately, so simulated games follow exactly the rules an
//! interactive game does.

use serde::{Deserialize, Serialize};

use crate::board::BoardVariant;
use crate::cards::CardTextTable;
use crate::core::{EngineConfig, GameRng, Result};
use crate::engine::TurnEngine;
use crate::gateway::{play_to_end, NullGateway};

use super::stats::{mean, SampleStats};

/// Configuration for a batch of simulated games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub games: usize,

    /// Master seed; each game gets a seed forked from it.
    pub seed: u64,

    /// Turn cap per game. Games that hit it count as not won.
    pub max_turns: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 50_000,
            seed: 42,
            max_turns: 10_000,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

/// Outcome of one simulated game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Turns taken. Bonus rolls from `extra_turn` cards are not turns.
    pub turns: u32,
    pub good_draws: u32,
    pub bad_draws: u32,
    pub won: bool,
}

impl GameSummary {
    #[must_use]
    pub fn total_draws(&self) -> u32 {
        self.good_draws + self.bad_draws
    }
}

/// Aggregate over a batch of games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub variant: String,
    pub games: usize,
    pub turns: SampleStats,
    pub draws: SampleStats,
    pub avg_good_draws: f64,
    pub avg_bad_draws: f64,

    /// Fraction of games that reached the terminal within `max_turns`.
    pub win_rate: f64,
}

/// Play one game to the end (or the turn cap).
pub fn simulate_game(
    variant: &BoardVariant,
    text: &CardTextTable,
    seed: u64,
    max_turns: u32,
) -> Result<GameSummary> {
    let config = EngineConfig::new().with_seed(seed);
    let mut engine = TurnEngine::new_game(variant.clone(), text.clone(), &config)?;
    let won = play_to_end(&mut engine, &mut NullGateway, max_turns);

    let state = engine.state();
    Ok(GameSummary {
        turns: state.turns_taken(),
        good_draws: state.good_draws,
        bad_draws: state.bad_draws,
        won,
    })
}

/// Play `config.games` games and summarize them.
///
/// Fails only if the variant itself is invalid.
pub fn simulate(variant: &BoardVariant, text: &CardTextTable, config: &SimulationConfig) -> Result<SimulationReport> {
    variant.validate()?;

    let mut master = GameRng::new(config.seed);
    let mut turns = Vec::with_capacity(config.games);
    let mut draws = Vec::with_capacity(config.games);
    let mut good = Vec::with_capacity(config.games);
    let mut bad = Vec::with_capacity(config.games);
    let mut wins = 0usize;

    for _ in 0..config.games {
        let seed = master.fork().seed();
        let summary = simulate_game(variant, text, seed, config.max_turns)?;

        turns.push(summary.turns);
        draws.push(summary.total_draws());
        good.push(summary.good_draws);
        bad.push(summary.bad_draws);
        if summary.won {
            wins += 1;
        }
    }

    let win_rate = if config.games == 0 {
        0.0
    } else {
        wins as f64 / config.games as f64
    };

    log::info!(
        "simulated {} games of '{}': mean {:.2} turns, win rate {:.3}",
        config.games,
        variant.name,
        mean(&turns),
        win_rate
    );

    Ok(SimulationReport {
        variant: variant.name.clone(),
        games: config.games,
        turns: SampleStats::from_samples(&turns),
        draws: SampleStats::from_samples(&draws),
        avg_good_draws: mean(&good),
        avg_bad_draws: mean(&bad),
        win_rate,
    })
}
