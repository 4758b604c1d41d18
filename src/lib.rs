//! # board-race
//!
//! A single-player board race engine: roll a die, move a token along a
//! line of spaces, draw good or bad cards that bend position and turn
//! flow, and stop at the terminal space.
//!
//! ## Design Principles
//!
//! 1. **Rules, not rendering**: The engine decides what happens next and
//!    tells a `PresentationGateway`. It never decides how anything looks.
//!
//! 2. **Explicit suspensions**: Every animation or acknowledgement the
//!    engine waits on is a `Suspension`. Only the matching completion call
//!    resumes it; stray calls come back as `Progress::Ignored`.
//!
//! 3. **Reproducible**: All randomness flows through one seeded `GameRng`.
//!    The same seed and inputs replay the same game.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `board`: Space types, board layout, variants
//! - `cards`: Templates, decks with the deferred re-draw rule, card text
//! - `effects`: Card effects and the id catalog
//! - `engine`: The turn state machine
//! - `gateway`: Presentation boundary and headless gateways
//! - `sim`: Batch Monte Carlo simulation

pub mod core;
pub mod board;
pub mod cards;
pub mod effects;
pub mod engine;
pub mod gateway;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{ConfigError, EngineConfig, GameRng, Result};

pub use crate::board::{BoardModel, BoardVariant, SpaceType};

pub use crate::cards::{CardFace, CardTemplate, CardTextTable, Deck, DeckKind, DeckSpec};

pub use crate::effects::{CardEffect, EffectCatalog};

pub use crate::engine::{GameState, Progress, Signal, Suspension, TurnEngine, TurnPhase};

pub use crate::gateway::{
    play_to_end, play_turn, CardPresentation, NullGateway, PresentationGateway, RecordingGateway,
};

pub use crate::sim::{simulate, simulate_game, GameSummary, SimulationConfig, SimulationReport};
