//! Core engine types: RNG, configuration, errors.
//!
//! These are shared by every other module. Nothing here knows about
//! boards, cards or turns.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{Dice, EngineConfig};
pub use error::{ConfigError, Result};
pub use rng::{GameRng, DIE_FACES};
