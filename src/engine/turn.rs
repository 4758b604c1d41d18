//! The turn engine.
//!
//! A turn runs `ReadyToRoll → RollAnimating → Moving → SpaceResolving →
//! CardPresented → EffectApplying → (ReadyToRoll | Won)`. Every point
//! where the presentation layer has to animate or acknowledge something
//! is a suspension: the engine records a single pending continuation and
//! returns `Progress::Suspended`. Only the matching completion call
//! resumes it; anything else is dropped with `Progress::Ignored`.
//!
//! ## Example
//!
//! ```
//! use board_race::board::{BoardModel, BoardVariant, SpaceType};
//! use board_race::cards::{CardTextTable, DeckSpec};
//! use board_race::core::EngineConfig;
//! use board_race::engine::{Progress, Suspension, TurnEngine};
//! use board_race::gateway::RecordingGateway;
//!
//! let board = BoardModel::new(vec![SpaceType::Start, SpaceType::Neutral, SpaceType::Terminal]).unwrap();
//! let variant = BoardVariant::new("Tiny", board, DeckSpec::new(), DeckSpec::new());
//! let config = EngineConfig::new().with_seed(1).with_scripted_rolls([1]);
//! let mut engine = TurnEngine::new_game(variant, CardTextTable::new(), &config).unwrap();
//! let mut gw = RecordingGateway::new();
//!
//! assert_eq!(
//!     engine.request_roll(&mut gw),
//!     Progress::Suspended(Suspension::RollAnimation { value: 1 })
//! );
//! assert_eq!(
//!     engine.roll_animation_complete(&mut gw),
//!     Progress::Suspended(Suspension::MoveStep { from: 0, to: 1 })
//! );
//! assert_eq!(engine.move_step_complete(&mut gw), Progress::Ready);
//! assert_eq!(engine.current_index(), 1);
//! ```

use std::time::{Duration, Instant};

use crate::board::{BoardModel, BoardVariant, SpaceType};
use crate::cards::{CardTemplate, CardTextTable, DeckKind};
use crate::core::{Dice, EngineConfig, GameRng, Result};
use crate::effects::{CardEffect, EffectCatalog, StepCount};
use crate::gateway::{CardPresentation, PresentationGateway};

use super::phase::{Progress, Signal, Suspension, TurnPhase};
use super::state::GameState;

pub const STATUS_TURN_SKIPPED: &str = "Turn skipped due to legacy slowdown.";
pub const STATUS_STEADY: &str = "Steady progress. Roll again.";
pub const STATUS_WON: &str = "Arrived at the finish!";
pub const STATUS_COUNTERED: &str = "Setback avoided. Roll again.";

/// What runs once a move finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AfterMove {
    /// A turn roll: look at the space landed on.
    ResolveSpace,
    /// A card effect: check for the win and end the turn.
    FinishEffect,
}

/// The single pending continuation.
#[derive(Clone, Debug)]
enum Pending {
    Idle,
    Roll {
        value: u8,
    },
    Step {
        from: usize,
        to: usize,
        target: usize,
        then: AfterMove,
    },
    Card {
        kind: DeckKind,
        card: CardTemplate,
        effect: CardEffect,
    },
}

/// Owns a game and drives its turns.
///
/// All mutation goes through `request_roll` and the completion methods.
/// The engine is `Send`; when driven from several threads, wrap it in a
/// single owner and marshal gateway completions onto that owner.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    variant_name: String,
    board: BoardModel,
    text: CardTextTable,
    state: GameState,
    phase: TurnPhase,
    pending: Pending,
    rng: GameRng,
    dice: Dice,
    step_timeout: Option<Duration>,
    suspended_at: Option<Instant>,
}

impl TurnEngine {
    /// Start a new game.
    ///
    /// Fails if the variant has a negative deck count or a card missing
    /// a required param. Board shape is checked when the `BoardModel` is
    /// built.
    pub fn new_game(variant: BoardVariant, text: CardTextTable, config: &EngineConfig) -> Result<Self> {
        variant.validate()?;

        let mut rng = config.rng();
        let state = GameState::new(&variant, &mut rng)?;

        if text.is_empty() {
            log::warn!("variant '{}' started without card text", variant.name);
        }
        log::info!(
            "new game '{}': {} spaces, {} good / {} bad cards",
            variant.name,
            variant.board.len(),
            state.good_deck.len(),
            state.bad_deck.len()
        );

        Ok(Self {
            variant_name: variant.name,
            board: variant.board,
            text,
            state,
            phase: TurnPhase::ReadyToRoll,
            pending: Pending::Idle,
            rng,
            dice: Dice::new(config.scripted_rolls.iter().copied()),
            step_timeout: config.step_timeout,
            suspended_at: None,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.state.turn_count
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase == TurnPhase::Won
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn last_roll(&self) -> Option<u8> {
        self.state.last_roll
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &BoardModel {
        &self.board
    }

    #[must_use]
    pub fn variant_name(&self) -> &str {
        &self.variant_name
    }

    /// What the engine is waiting on, if anything.
    #[must_use]
    pub fn suspension(&self) -> Option<Suspension> {
        match &self.pending {
            Pending::Idle => None,
            Pending::Roll { value } => Some(Suspension::RollAnimation { value: *value }),
            Pending::Step { from, to, .. } => Some(Suspension::MoveStep { from: *from, to: *to }),
            Pending::Card { kind, .. } => Some(Suspension::CardAcknowledgement { kind: *kind }),
        }
    }

    // === Entry points ===

    /// Start a turn.
    ///
    /// Dropped silently while a turn is in flight or after the win.
    pub fn request_roll(&mut self, gateway: &mut dyn PresentationGateway) -> Progress {
        if self.phase == TurnPhase::Won {
            log::debug!("roll requested after the win; ignoring");
            return Progress::Ignored;
        }
        if self.state.roll_in_flight {
            log::debug!("roll requested during turn {}; ignoring", self.state.turn_count);
            return Progress::Ignored;
        }

        self.state.roll_in_flight = true;
        self.state.turn_count += 1;
        gateway.report_turn_count(self.state.turn_count);

        if self.state.skip_next_turn {
            self.state.skip_next_turn = false;
            log::debug!("turn {} skipped", self.state.turn_count);
            gateway.report_status(STATUS_TURN_SKIPPED);
            self.state.roll_in_flight = false;
            return Progress::TurnSkipped;
        }

        let value = self.dice.roll(&mut self.rng);
        self.state.last_roll = Some(value);
        log::debug!("turn {}: rolled {}", self.state.turn_count, value);

        self.transition(TurnPhase::RollAnimating);
        gateway.animate_roll(value);
        self.suspend(Pending::Roll { value })
    }

    /// The die animation finished.
    pub fn roll_animation_complete(&mut self, gateway: &mut dyn PresentationGateway) -> Progress {
        let value = match self.pending {
            Pending::Roll { value } => value,
            _ => return self.unexpected(Signal::RollAnimated),
        };
        self.resume();

        gateway.report_status(&format!("Rolled {}. Moving forward.", value));
        let target = self.board.offset(self.state.current_index, i64::from(value));
        self.begin_move(target, AfterMove::ResolveSpace, gateway)
    }

    /// One move step finished.
    pub fn move_step_complete(&mut self, gateway: &mut dyn PresentationGateway) -> Progress {
        let (to, target, then) = match self.pending {
            Pending::Step { to, target, then, .. } => (to, target, then),
            _ => return self.unexpected(Signal::StepDone),
        };
        self.resume();

        if to == target {
            self.state.current_index = target;
            self.after_move(then, gateway)
        } else {
            self.step(to, target, then, gateway)
        }
    }

    /// The player acknowledged the presented card.
    pub fn card_acknowledged(&mut self, gateway: &mut dyn PresentationGateway) -> Progress {
        let effect = match std::mem::replace(&mut self.pending, Pending::Idle) {
            Pending::Card { effect, .. } => effect,
            other => {
                self.pending = other;
                return self.unexpected(Signal::CardAcknowledged);
            }
        };
        self.resume();

        self.apply_effect(effect, gateway)
    }

    /// Dispatch a completion signal to its handler.
    pub fn signal(&mut self, signal: Signal, gateway: &mut dyn PresentationGateway) -> Progress {
        match signal {
            Signal::RollAnimated => self.roll_animation_complete(gateway),
            Signal::StepDone => self.move_step_complete(gateway),
            Signal::CardAcknowledged => self.card_acknowledged(gateway),
        }
    }

    /// Assume the pending step completed if it has waited longer than the
    /// configured timeout.
    ///
    /// Returns the current suspension while still within the timeout, and
    /// `Ignored` when nothing is pending or no timeout is configured.
    pub fn poll_timeout(&mut self, now: Instant, gateway: &mut dyn PresentationGateway) -> Progress {
        let (timeout, since, suspension) = match (self.step_timeout, self.suspended_at, self.suspension()) {
            (Some(timeout), Some(since), Some(suspension)) => (timeout, since, suspension),
            _ => return Progress::Ignored,
        };

        if now.saturating_duration_since(since) < timeout {
            return Progress::Suspended(suspension);
        }

        log::warn!(
            "{:?} not completed within {:?}; assuming it finished",
            suspension,
            timeout
        );
        self.signal(suspension.signal(), gateway)
    }

    // === Internal transitions ===

    fn transition(&mut self, phase: TurnPhase) {
        if self.phase != phase {
            log::debug!("{:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    fn suspend(&mut self, pending: Pending) -> Progress {
        self.pending = pending;
        self.suspended_at = Some(Instant::now());
        match self.suspension() {
            Some(suspension) => Progress::Suspended(suspension),
            None => Progress::Ignored,
        }
    }

    fn resume(&mut self) {
        self.pending = Pending::Idle;
        self.suspended_at = None;
    }

    fn unexpected(&self, signal: Signal) -> Progress {
        log::warn!("unexpected {:?} while {:?}; ignoring", signal, self.phase);
        Progress::Ignored
    }

    fn begin_move(&mut self, target: usize, then: AfterMove, gateway: &mut dyn PresentationGateway) -> Progress {
        self.transition(TurnPhase::Moving);
        let from = self.state.current_index;
        if target == from {
            return self.after_move(then, gateway);
        }
        self.step(from, target, then, gateway)
    }

    fn step(&mut self, from: usize, target: usize, then: AfterMove, gateway: &mut dyn PresentationGateway) -> Progress {
        let to = if target > from { from + 1 } else { from - 1 };
        gateway.animate_move_step(from, to);
        self.suspend(Pending::Step { from, to, target, then })
    }

    fn after_move(&mut self, then: AfterMove, gateway: &mut dyn PresentationGateway) -> Progress {
        match then {
            AfterMove::ResolveSpace => self.resolve_space(gateway),
            AfterMove::FinishEffect => self.finish_effect(gateway),
        }
    }

    fn resolve_space(&mut self, gateway: &mut dyn PresentationGateway) -> Progress {
        self.transition(TurnPhase::SpaceResolving);
        let index = self.state.current_index;
        if self.board.is_terminal(index) {
            return self.win(gateway);
        }

        let space = self.board.space(index).unwrap_or(SpaceType::Neutral);
        if !space.draws_card() {
            gateway.report_status(STATUS_STEADY);
            return self.end_turn();
        }
        let kind = if space == SpaceType::Good { DeckKind::Good } else { DeckKind::Bad };

        if kind == DeckKind::Bad && self.state.counter_next_bad {
            self.state.counter_next_bad = false;
            log::debug!("bad space {} countered", index);
            gateway.report_status(STATUS_COUNTERED);
            return self.end_turn();
        }

        let card = match self.state.deck_mut(kind).draw(&mut self.rng) {
            Some(card) => card,
            None => {
                log::warn!("{} deck is empty; no card drawn at space {}", kind, index);
                gateway.report_status(STATUS_STEADY);
                return self.end_turn();
            }
        };
        self.state.count_draw(kind);

        let effect = EffectCatalog::resolve(&card);
        let (face, _) = self.text.pick(space, &card.id, &mut self.rng);
        log::debug!("drew {} card '{}' at space {}", kind, card.id, index);

        let presentation = CardPresentation {
            kind,
            card_id: card.id.clone(),
            title: face.title,
            description: face.description,
            effect_summary: effect.summary(),
        };

        self.transition(TurnPhase::CardPresented);
        gateway.present_card(&presentation);
        self.suspend(Pending::Card { kind, card, effect })
    }

    fn apply_effect(&mut self, effect: CardEffect, gateway: &mut dyn PresentationGateway) -> Progress {
        self.transition(TurnPhase::EffectApplying);
        log::debug!("applying {:?}", effect);
        let here = self.state.current_index;

        match effect {
            CardEffect::GoToEnd => {
                gateway.report_status("Fast track activated.");
                self.begin_move(self.board.last_index(), AfterMove::FinishEffect, gateway)
            }
            CardEffect::GoToStart => {
                gateway.report_status("Security reset. Returning to start.");
                self.begin_move(0, AfterMove::FinishEffect, gateway)
            }
            CardEffect::LoseTurn => {
                self.state.skip_next_turn = true;
                gateway.report_status("Legacy slowdown: next turn skipped.");
                self.finish_effect(gateway)
            }
            CardEffect::ExtraTurn => {
                self.state.extra_turns += 1;
                gateway.report_status("Momentum gained. Extra turn ready.");
                self.finish_effect(gateway)
            }
            CardEffect::RollForward => {
                let roll = self.dice.roll(&mut self.rng);
                gateway.report_status(&format!("Auto-promotion! Rolled {}, moving forward.", roll));
                let target = self.board.offset(here, i64::from(roll));
                self.begin_move(target, AfterMove::FinishEffect, gateway)
            }
            CardEffect::RollBack => {
                let roll = self.dice.roll(&mut self.rng);
                gateway.report_status(&format!("Rollback! Rolled {}, moving back.", roll));
                let target = self.board.offset(here, -i64::from(roll));
                self.begin_move(target, AfterMove::FinishEffect, gateway)
            }
            CardEffect::JumpForward(count) => {
                let steps = match count {
                    StepCount::Fixed(steps) => steps,
                    StepCount::Range { min, max } => self.rng.gen_inclusive(min, max),
                };
                gateway.report_status("Pipeline boost!");
                let target = self.board.offset(here, steps);
                self.begin_move(target, AfterMove::FinishEffect, gateway)
            }
            CardEffect::GoBack { steps } => {
                gateway.report_status("Setback encountered.");
                let target = self.board.offset(here, steps.saturating_neg());
                self.begin_move(target, AfterMove::FinishEffect, gateway)
            }
            CardEffect::JumpToNextNeutral => {
                gateway.report_status("Clear path ahead.");
                let target = self.board.next_neutral(here);
                self.begin_move(target, AfterMove::FinishEffect, gateway)
            }
            CardEffect::CounterNextBad => {
                self.state.counter_next_bad = true;
                gateway.report_status("Shielded against the next setback.");
                self.finish_effect(gateway)
            }
            CardEffect::NoOp { id } => {
                log::debug!("card '{}' has no effect", id);
                gateway.report_status("Pipeline shifts. Roll again.");
                self.finish_effect(gateway)
            }
        }
    }

    fn finish_effect(&mut self, gateway: &mut dyn PresentationGateway) -> Progress {
        if self.board.is_terminal(self.state.current_index) {
            return self.win(gateway);
        }
        self.end_turn()
    }

    fn end_turn(&mut self) -> Progress {
        self.transition(TurnPhase::ReadyToRoll);
        self.resume();
        self.state.roll_in_flight = false;
        Progress::Ready
    }

    fn win(&mut self, gateway: &mut dyn PresentationGateway) -> Progress {
        self.transition(TurnPhase::Won);
        self.resume();
        self.state.roll_in_flight = false;
        log::info!(
            "'{}' won after {} turns ({} cards drawn)",
            self.variant_name,
            self.state.turn_count,
            self.state.total_draws()
        );
        gateway.report_status(STATUS_WON);
        gateway.report_win();
        Progress::Won
    }
}
