//! Game state: the single mutable aggregate of a game.
//!
//! Owned by `TurnEngine` and only ever handed out as `&GameState`, so
//! nothing outside the engine can mutate it. A new game builds a new
//! state; there is no partial reset.

use crate::board::BoardVariant;
use crate::cards::{Deck, DeckKind};
use crate::core::{GameRng, Result};

#[derive(Clone, Debug)]
pub struct GameState {
    /// Token position, always in `[0, N-1]`.
    pub current_index: usize,

    /// Roll attempts so far, skipped turns included.
    pub turn_count: u32,

    /// The next roll is consumed without moving.
    pub skip_next_turn: bool,

    /// The next bad space draws no card.
    pub counter_next_bad: bool,

    /// Last turn roll, `None` before the first.
    pub last_roll: Option<u8>,

    pub good_deck: Deck,
    pub bad_deck: Deck,

    /// A turn is between `request_roll` and its end.
    pub roll_in_flight: bool,

    pub good_draws: u32,
    pub bad_draws: u32,

    /// `extra_turn` cards applied. Each one makes the following roll a
    /// bonus roll rather than a new turn.
    pub extra_turns: u32,
}

impl GameState {
    /// Fresh state for a variant, with both decks shuffled.
    pub fn new(variant: &BoardVariant, rng: &mut GameRng) -> Result<Self> {
        Ok(Self {
            current_index: 0,
            turn_count: 0,
            skip_next_turn: false,
            counter_next_bad: false,
            last_roll: None,
            good_deck: Deck::build(&variant.good_deck, rng)?,
            bad_deck: Deck::build(&variant.bad_deck, rng)?,
            roll_in_flight: false,
            good_draws: 0,
            bad_draws: 0,
            extra_turns: 0,
        })
    }

    #[must_use]
    pub fn deck(&self, kind: DeckKind) -> &Deck {
        match kind {
            DeckKind::Good => &self.good_deck,
            DeckKind::Bad => &self.bad_deck,
        }
    }

    pub(crate) fn deck_mut(&mut self, kind: DeckKind) -> &mut Deck {
        match kind {
            DeckKind::Good => &mut self.good_deck,
            DeckKind::Bad => &mut self.bad_deck,
        }
    }

    pub(crate) fn count_draw(&mut self, kind: DeckKind) {
        match kind {
            DeckKind::Good => self.good_draws += 1,
            DeckKind::Bad => self.bad_draws += 1,
        }
    }

    /// Turns taken, not counting bonus rolls granted by `extra_turn`.
    #[must_use]
    pub fn turns_taken(&self) -> u32 {
        self.turn_count.saturating_sub(self.extra_turns)
    }

    /// Cards drawn from both decks.
    #[must_use]
    pub fn total_draws(&self) -> u32 {
        self.good_draws + self.bad_draws
    }
}
