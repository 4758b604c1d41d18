//! Turn engine for a single-player board race.
//!
//! ## Key Types
//!
//! - `TurnEngine`: owns one game and drives it one suspension at a time
//! - `GameState`: the mutable aggregate the engine owns
//! - `TurnPhase`: where the turn state machine is
//! - `Progress`: what each entry point returns
//! - `Suspension` / `Signal`: what the engine waits on and what resumes it

mod phase;
mod state;
mod turn;

pub use phase::{Progress, Signal, Suspension, TurnPhase};
pub use state::GameState;
pub use turn::{TurnEngine, STATUS_COUNTERED, STATUS_STEADY, STATUS_TURN_SKIPPED, STATUS_WON};
