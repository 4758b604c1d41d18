//! Card effect descriptors.
//!
//! Effects are a closed set of variants. Identifiers the catalog does not
//! recognize map to `CardEffect::NoOp` instead of failing, so card data
//! can name effects this engine has not learned yet.

use serde::{Deserialize, Serialize};

/// How far a jump moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepCount {
    /// Always exactly this many spaces.
    Fixed(i64),
    /// A uniform value in `[min, max]`, drawn when the effect applies.
    Range { min: i64, max: i64 },
}

/// A state-transition recipe for one drawn card.
///
/// ## Movement
///
/// - `GoToEnd`, `GoToStart`: Jump straight to the last or first space
/// - `JumpForward`, `GoBack`: Move by a step count
/// - `RollForward`, `RollBack`: Roll one extra die and move by it
/// - `JumpToNextNeutral`: Move to the next neutral space
///
/// ## Turn flow
///
/// - `LoseTurn`: Skip the next roll
/// - `ExtraTurn`: Roll again right away
/// - `CounterNextBad`: Ignore the next bad space
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    GoToEnd,
    GoToStart,
    LoseTurn,
    ExtraTurn,
    RollForward,
    RollBack,
    JumpForward(StepCount),
    GoBack { steps: i64 },
    JumpToNextNeutral,
    CounterNextBad,
    /// Narrative-only card. Keeps the unrecognized id for logging.
    NoOp { id: String },
}

impl CardEffect {
    /// One-line description shown with the card.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            CardEffect::GoToEnd => "Effect: Go to the finish.".to_string(),
            CardEffect::GoToStart => "Effect: Return to start.".to_string(),
            CardEffect::LoseTurn => "Effect: Lose your next turn.".to_string(),
            CardEffect::ExtraTurn => "Effect: Take another turn.".to_string(),
            CardEffect::RollForward => "Effect: Roll and move forward.".to_string(),
            CardEffect::RollBack => "Effect: Roll and move back.".to_string(),
            CardEffect::JumpForward(StepCount::Fixed(steps)) => format!("Effect: Move forward {}.", steps),
            CardEffect::JumpForward(StepCount::Range { min, max }) => {
                format!("Effect: Move forward {} to {}.", min, max)
            }
            CardEffect::GoBack { steps } => format!("Effect: Move back {}.", steps),
            CardEffect::JumpToNextNeutral => "Effect: Advance to the next neutral space.".to_string(),
            CardEffect::CounterNextBad => "Effect: Ignore the next bad space.".to_string(),
            CardEffect::NoOp { .. } => "Effect: Adjust your position.".to_string(),
        }
    }
}

impl std::fmt::Display for CardEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}
