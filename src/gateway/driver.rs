//! Synchronous drivers.
//!
//! For gateways that finish every animation immediately (tests, batch
//! runs, headless replays): complete each suspension as soon as it is
//! reported.

use crate::engine::{Progress, TurnEngine};

use super::PresentationGateway;

/// Run one full turn, acknowledging every suspension at once.
///
/// Returns how the turn ended: `Ready`, `TurnSkipped`, `Won`, or
/// `Ignored` if the engine refused the roll.
pub fn play_turn(engine: &mut TurnEngine, gateway: &mut dyn PresentationGateway) -> Progress {
    let mut progress = engine.request_roll(gateway);
    while let Progress::Suspended(suspension) = progress {
        progress = engine.signal(suspension.signal(), gateway);
    }
    progress
}

/// Play turns until the game is won or `max_turns` turns have been taken.
///
/// Returns whether the game was won.
pub fn play_to_end(engine: &mut TurnEngine, gateway: &mut dyn PresentationGateway, max_turns: u32) -> bool {
    while !engine.is_won() && engine.turn_count() < max_turns {
        if play_turn(engine, gateway) == Progress::Ignored {
            break;
        }
    }
    engine.is_won()
}
