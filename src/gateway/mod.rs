//! Presentation boundary.
//!
//! The turn engine calls outward through `PresentationGateway` whenever
//! something should be shown, then suspends. The presentation layer
//! resumes it by calling the matching completion method on the engine
//! (`roll_animation_complete`, `move_step_complete`, `card_acknowledged`)
//! once the animation or acknowledgement is done.
//!
//! The engine never decides how anything looks; the gateway never
//! computes game rules.

mod driver;
mod recording;

pub use driver::{play_to_end, play_turn};
pub use recording::{GatewayEvent, NullGateway, RecordingGateway};

use serde::{Deserialize, Serialize};

use crate::cards::DeckKind;

/// Everything the presentation layer needs to show a drawn card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPresentation {
    pub kind: DeckKind,
    pub card_id: String,
    pub title: String,
    pub description: String,
    pub effect_summary: String,
}

/// Outbound interface from the engine to the rendering layer.
///
/// The three animation methods start something the engine then waits
/// on. The `report_*` methods are fire-and-forget notifications.
pub trait PresentationGateway {
    /// Show the die landing on `value`.
    fn animate_roll(&mut self, value: u8);

    /// Move the token one space.
    fn animate_move_step(&mut self, from: usize, to: usize);

    /// Show a drawn card until the player acknowledges it.
    fn present_card(&mut self, card: &CardPresentation);

    fn report_status(&mut self, _message: &str) {}

    fn report_turn_count(&mut self, _turns: u32) {}

    fn report_win(&mut self) {}
}
