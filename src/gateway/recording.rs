//! Headless gateways.

use serde::{Deserialize, Serialize};

use super::{CardPresentation, PresentationGateway};

/// One outbound call made by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatewayEvent {
    Roll(u8),
    MoveStep { from: usize, to: usize },
    Card(CardPresentation),
    Status(String),
    TurnCount(u32),
    Win,
}

/// Gateway that records every call, in order.
///
/// Useful for tests and for replaying a game into a real renderer.
#[derive(Clone, Debug, Default)]
pub struct RecordingGateway {
    events: Vec<GatewayEvent>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GatewayEvent] {
        &self.events
    }

    /// Drain recorded events.
    pub fn take(&mut self) -> Vec<GatewayEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Status messages, oldest first.
    pub fn statuses(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            GatewayEvent::Status(message) => Some(message.as_str()),
            _ => None,
        })
    }

    /// Every `(from, to)` move step, oldest first.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.events.iter().filter_map(|e| match e {
            GatewayEvent::MoveStep { from, to } => Some((*from, *to)),
            _ => None,
        })
    }

    /// Every card presented, oldest first.
    pub fn cards(&self) -> impl Iterator<Item = &CardPresentation> {
        self.events.iter().filter_map(|e| match e {
            GatewayEvent::Card(card) => Some(card),
            _ => None,
        })
    }

    #[must_use]
    pub fn win_reported(&self) -> bool {
        self.events.iter().any(|e| matches!(e, GatewayEvent::Win))
    }
}

impl PresentationGateway for RecordingGateway {
    fn animate_roll(&mut self, value: u8) {
        self.events.push(GatewayEvent::Roll(value));
    }

    fn animate_move_step(&mut self, from: usize, to: usize) {
        self.events.push(GatewayEvent::MoveStep { from, to });
    }

    fn present_card(&mut self, card: &CardPresentation) {
        self.events.push(GatewayEvent::Card(card.clone()));
    }

    fn report_status(&mut self, message: &str) {
        self.events.push(GatewayEvent::Status(message.to_string()));
    }

    fn report_turn_count(&mut self, turns: u32) {
        self.events.push(GatewayEvent::TurnCount(turns));
    }

    fn report_win(&mut self) {
        self.events.push(GatewayEvent::Win);
    }
}

/// Gateway that discards everything. Used for batch simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullGateway;

impl PresentationGateway for NullGateway {
    fn animate_roll(&mut self, _value: u8) {}

    fn animate_move_step(&mut self, _from: usize, _to: usize) {}

    fn present_card(&mut self, _card: &CardPresentation) {}
}
