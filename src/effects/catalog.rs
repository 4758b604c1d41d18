//! Effect catalog - card identifier to effect mapping.
//!
//! `EffectCatalog::resolve` is pure: it reads a template and returns the
//! effect it stands for. Unknown identifiers resolve to `NoOp`.

use crate::cards::CardTemplate;
use crate::core::{ConfigError, Result};

use super::effect::{CardEffect, StepCount};

pub const GO_TO_END: &str = "go_to_end";
pub const GO_TO_START: &str = "go_to_start";
pub const LOSE_TURN: &str = "lose_turn";
pub const EXTRA_TURN: &str = "extra_turn";
pub const ROLL_FORWARD: &str = "roll_forward";
pub const ROLL_BACK: &str = "roll_back";
pub const JUMP_FORWARD: &str = "jump_forward";
pub const GO_BACK: &str = "go_back";
pub const JUMP_NEXT_NEUTRAL: &str = "jump_next_neutral";
pub const COUNTER_NEXT_BAD: &str = "counter_next_bad";

/// Default bounds for a `jump_forward` card without `steps`.
const DEFAULT_JUMP_MIN: i64 = 1;
const DEFAULT_JUMP_MAX: i64 = 3;

/// Maps card templates to effects.
pub struct EffectCatalog;

impl EffectCatalog {
    /// Resolve a template to its effect.
    #[must_use]
    pub fn resolve(card: &CardTemplate) -> CardEffect {
        match card.id.as_str() {
            GO_TO_END => CardEffect::GoToEnd,
            GO_TO_START => CardEffect::GoToStart,
            LOSE_TURN => CardEffect::LoseTurn,
            EXTRA_TURN => CardEffect::ExtraTurn,
            ROLL_FORWARD => CardEffect::RollForward,
            ROLL_BACK => CardEffect::RollBack,
            JUMP_FORWARD => match card.param("steps") {
                Some(steps) => CardEffect::JumpForward(StepCount::Fixed(steps)),
                None => CardEffect::JumpForward(StepCount::Range {
                    min: card.param_or("min", DEFAULT_JUMP_MIN),
                    max: card.param_or("max", DEFAULT_JUMP_MAX),
                }),
            },
            // Validation rejects go_back without steps before a game starts.
            GO_BACK => CardEffect::GoBack {
                steps: card.param_or("steps", 0),
            },
            JUMP_NEXT_NEUTRAL => CardEffect::JumpToNextNeutral,
            COUNTER_NEXT_BAD => CardEffect::CounterNextBad,
            other => CardEffect::NoOp { id: other.to_string() },
        }
    }

    /// Check that a template carries the params its effect needs.
    pub fn validate(card: &CardTemplate) -> Result<()> {
        if card.id == GO_BACK && card.param("steps").is_none() {
            return Err(ConfigError::MissingParam {
                card: card.id.clone(),
                param: "steps",
            });
        }
        Ok(())
    }
}
