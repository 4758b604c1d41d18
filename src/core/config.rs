//! Engine configuration.
//!
//! Games are configured at construction time by providing an
//! `EngineConfig`. The board and decks come from the `BoardVariant`;
//! this type covers how the engine itself behaves.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::rng::{GameRng, DIE_FACES};

/// Engine configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Random seed. `None` seeds from OS entropy.
    /// Same seed produces an identical game.
    pub seed: Option<u64>,

    /// Longest the engine waits on the presentation layer for one step.
    /// `None` waits forever. See `TurnEngine::poll_timeout`.
    pub step_timeout: Option<Duration>,

    /// Die values handed out before falling back to the RNG.
    /// Values outside 1..=6 are clamped.
    pub scripted_rolls: Vec<u8>,
}

impl EngineConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-step animation timeout.
    #[must_use]
    pub fn with_step_timeout(mut self, timeout: Duration) -> Self {
        self.step_timeout = Some(timeout);
        self
    }

    /// Script the next die values.
    #[must_use]
    pub fn with_scripted_rolls(mut self, rolls: impl IntoIterator<Item = u8>) -> Self {
        self.scripted_rolls = rolls.into_iter().collect();
        self
    }

    /// Build the RNG described by this config.
    pub(crate) fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

/// Source of die values: scripted values first, then the RNG.
#[derive(Clone, Debug, Default)]
pub struct Dice {
    scripted: VecDeque<u8>,
}

impl Dice {
    /// Create dice that hand out `scripted` before rolling randomly.
    pub fn new(scripted: impl IntoIterator<Item = u8>) -> Self {
        Self {
            scripted: scripted.into_iter().collect(),
        }
    }

    /// Produce the next die value.
    pub fn roll(&mut self, rng: &mut GameRng) -> u8 {
        match self.scripted.pop_front() {
            Some(value) => value.clamp(1, DIE_FACES),
            None => rng.roll_die(),
        }
    }

    /// Number of scripted values left.
    #[must_use]
    pub fn scripted_remaining(&self) -> usize {
        self.scripted.len()
    }
}
