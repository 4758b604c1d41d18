//! Card effects.
//!
//! - `CardEffect`: Closed set of effect variants, with a no-op for
//!   identifiers nobody knows
//! - `EffectCatalog`: Pure mapping from a card template to its effect
//!
//! Applying an effect is the turn engine's job; nothing here touches
//! game state.

mod catalog;
mod effect;

pub use catalog::EffectCatalog;
pub use effect::{CardEffect, StepCount};
