//! Turn phases and the values engine entry points return.

use serde::{Deserialize, Serialize};

use crate::cards::DeckKind;

/// Where the turn state machine is.
///
/// `SpaceResolving` and `EffectApplying` are pass-through phases: the
/// engine never rests in them between calls. `Won` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    ReadyToRoll,
    RollAnimating,
    Moving,
    SpaceResolving,
    CardPresented,
    EffectApplying,
    Won,
}

/// Completion signals the presentation layer sends back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    /// The die animation finished.
    RollAnimated,
    /// One move step finished.
    StepDone,
    /// The player dismissed the card.
    CardAcknowledged,
}

/// What the engine is waiting on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suspension {
    RollAnimation { value: u8 },
    MoveStep { from: usize, to: usize },
    CardAcknowledgement { kind: DeckKind },
}

impl Suspension {
    /// The signal that resumes the engine.
    #[must_use]
    pub const fn signal(self) -> Signal {
        match self {
            Suspension::RollAnimation { .. } => Signal::RollAnimated,
            Suspension::MoveStep { .. } => Signal::StepDone,
            Suspension::CardAcknowledgement { .. } => Signal::CardAcknowledged,
        }
    }
}

/// Result of an engine entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    /// The call was dropped: a reentrant roll, a roll after the win, or a
    /// completion signal nobody was waiting for. State is unchanged.
    Ignored,
    /// The engine is waiting on the presentation layer.
    Suspended(Suspension),
    /// The roll was consumed by a lost turn.
    TurnSkipped,
    /// The turn is over; a new roll is accepted.
    Ready,
    /// The token reached the terminal space.
    Won,
}

impl Progress {
    #[must_use]
    pub const fn is_suspended(&self) -> bool {
        matches!(self, Progress::Suspended(_))
    }

    /// Did this call end the turn (or the game)?
    #[must_use]
    pub const fn turn_over(&self) -> bool {
        matches!(self, Progress::TurnSkipped | Progress::Ready | Progress::Won)
    }
}
