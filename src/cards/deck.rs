//! Decks: a fixed card population and a mutable draw order.
//!
//! ## Draw policy
//!
//! 1. An empty draw queue is refilled with a fresh shuffle of the population.
//! 2. The front card is taken as the candidate.
//! 3. A `deferred` candidate goes to the back of the queue and the new front
//!    card is drawn instead. Only one deferral hop happens per draw; if the
//!    new front card is also deferred it is drawn anyway.
//!
//! A single deferred card in an otherwise empty queue is pushed back and
//! immediately popped again, so `draw` always terminates.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::template::{CardParams, CardTemplate};
use crate::core::{ConfigError, GameRng, Result};

/// Which deck a card came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckKind {
    Good,
    Bad,
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckKind::Good => f.write_str("good"),
            DeckKind::Bad => f.write_str("bad"),
        }
    }
}

fn default_count() -> i64 {
    1
}

/// One `{template, count}` pair of a deck specification.
///
/// In data files the template fields sit next to `count`:
/// `{"id": "go_back", "params": {"steps": 2}, "count": 3}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDeckEntry", into = "RawDeckEntry")]
pub struct DeckEntry {
    pub template: CardTemplate,

    /// Copies of the template in the population.
    pub count: i64,
}

#[derive(Serialize, Deserialize)]
struct RawDeckEntry {
    id: String,
    #[serde(default)]
    params: CardParams,
    #[serde(default, alias = "pin_last")]
    deferred: bool,
    #[serde(default = "default_count")]
    count: i64,
}

impl From<RawDeckEntry> for DeckEntry {
    fn from(raw: RawDeckEntry) -> Self {
        Self {
            template: CardTemplate {
                id: raw.id,
                params: raw.params,
                deferred: raw.deferred,
            },
            count: raw.count,
        }
    }
}

impl From<DeckEntry> for RawDeckEntry {
    fn from(entry: DeckEntry) -> Self {
        Self {
            id: entry.template.id,
            params: entry.template.params,
            deferred: entry.template.deferred,
            count: entry.count,
        }
    }
}

impl DeckEntry {
    pub fn new(template: CardTemplate, count: i64) -> Self {
        Self { template, count }
    }
}

/// Declarative deck contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSpec {
    pub cards: Vec<DeckEntry>,
}

impl DeckSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` copies of `template` (builder pattern).
    #[must_use]
    pub fn with(mut self, template: CardTemplate, count: i64) -> Self {
        self.cards.push(DeckEntry::new(template, count));
        self
    }

    /// Iterate over every template in the spec.
    pub fn templates(&self) -> impl Iterator<Item = &CardTemplate> {
        self.cards.iter().map(|entry| &entry.template)
    }

    /// Population size once expanded, ignoring negative counts.
    #[must_use]
    pub fn population_size(&self) -> usize {
        self.cards.iter().map(|entry| entry.count.max(0) as usize).sum()
    }
}

/// A deck of cards.
#[derive(Clone, Debug)]
pub struct Deck {
    population: Vec<CardTemplate>,
    draw_queue: VecDeque<CardTemplate>,
    reshuffles: u32,
}

impl Deck {
    /// Expand a deck specification and shuffle the initial draw order.
    ///
    /// Fails on any negative count. A spec with no cards at all builds an
    /// empty deck, which is logged but allowed; drawing from it yields
    /// nothing.
    pub fn build(spec: &DeckSpec, rng: &mut GameRng) -> Result<Self> {
        let mut population = Vec::with_capacity(spec.population_size());

        for entry in &spec.cards {
            if entry.count < 0 {
                return Err(ConfigError::NegativeCount {
                    card: entry.template.id.clone(),
                    count: entry.count,
                });
            }
            population.extend(std::iter::repeat(entry.template.clone()).take(entry.count as usize));
        }

        if population.is_empty() {
            log::warn!("deck built with no cards; draws from it will come up empty");
        }

        let mut order = population.clone();
        Self::shuffle(&mut order, rng);

        Ok(Self {
            population,
            draw_queue: order.into(),
            reshuffles: 0,
        })
    }

    /// Fisher-Yates shuffle: for `i` from last to first, swap with a uniform
    /// index in `[0, i]`.
    pub fn shuffle<T>(items: &mut [T], rng: &mut GameRng) {
        for i in (1..items.len()).rev() {
            let j = rng.gen_range_usize(0..i + 1);
            items.swap(i, j);
        }
    }

    /// Draw one card following the deferred-card policy.
    ///
    /// Returns `None` only when the population is empty.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<CardTemplate> {
        if self.draw_queue.is_empty() {
            self.refill(rng);
        }

        let candidate = self.draw_queue.pop_front()?;
        if !candidate.deferred {
            return Some(candidate);
        }

        log::debug!("deferring '{}' to the back of the deck", candidate.id);
        self.draw_queue.push_back(candidate);
        self.draw_queue.pop_front()
    }

    fn refill(&mut self, rng: &mut GameRng) {
        if self.population.is_empty() {
            return;
        }
        let mut order = self.population.clone();
        Self::shuffle(&mut order, rng);
        self.draw_queue = order.into();
        self.reshuffles += 1;
        log::debug!("deck reshuffled ({} cards)", self.population.len());
    }

    /// The fixed card population.
    #[must_use]
    pub fn population(&self) -> &[CardTemplate] {
        &self.population
    }

    /// Cards remaining before the next reshuffle, front first.
    pub fn draw_queue(&self) -> impl Iterator<Item = &CardTemplate> {
        self.draw_queue.iter()
    }

    /// Number of cards left in the draw queue.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draw_queue.len()
    }

    /// Times the draw queue has been refilled after construction.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.population.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(cards: &[CardTemplate]) -> Vec<String> {
        let mut ids: Vec<_> = cards.iter().map(|c| c.id.clone()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_build_expands_counts() {
        let spec = DeckSpec::new()
            .with(CardTemplate::new("a"), 2)
            .with(CardTemplate::new("b"), 1)
            .with(CardTemplate::new("c"), 0);
        let mut rng = GameRng::new(42);

        let deck = Deck::build(&spec, &mut rng).unwrap();

        assert_eq!(deck.len(), 3);
        assert_eq!(deck.remaining(), 3);
        assert_eq!(ids(deck.population()), vec!["a", "a", "b"]);
        assert_eq!(deck.reshuffles(), 0);
    }

    #[test]
    fn test_build_rejects_negative_count() {
        let spec = DeckSpec::new()
            .with(CardTemplate::new("a"), 1)
            .with(CardTemplate::new("broken"), -1);
        let mut rng = GameRng::new(42);

        let err = Deck::build(&spec, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NegativeCount {
                card: "broken".to_string(),
                count: -1
            }
        );
    }

    #[test]
    fn test_empty_deck_draws_nothing() {
        let spec = DeckSpec::new().with(CardTemplate::new("a"), 0);
        let mut rng = GameRng::new(42);

        let mut deck = Deck::build(&spec, &mut rng).unwrap();
        assert!(deck.is_empty());
        assert!(deck.draw(&mut rng).is_none());
        assert!(deck.draw(&mut rng).is_none());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=10).collect();

        Deck::shuffle(&mut data, &mut rng);

        assert_ne!(data, (1..=10).collect::<Vec<_>>());
        data.sort();
        assert_eq!(data, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_trivial_lengths() {
        let mut rng = GameRng::new(1);

        let mut empty: Vec<u8> = vec![];
        Deck::shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![7];
        Deck::shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn test_draw_reshuffles_when_exhausted() {
        let spec = DeckSpec::new()
            .with(CardTemplate::new("a"), 1)
            .with(CardTemplate::new("b"), 1);
        let mut rng = GameRng::new(5);
        let mut deck = Deck::build(&spec, &mut rng).unwrap();

        let first: Vec<_> = (0..2).map(|_| deck.draw(&mut rng).unwrap()).collect();
        assert_eq!(ids(&first), vec!["a", "b"]);
        assert_eq!(deck.remaining(), 0);

        let third = deck.draw(&mut rng).unwrap();
        assert!(third.id == "a" || third.id == "b");
        assert_eq!(deck.reshuffles(), 1);
        assert_eq!(deck.remaining(), 1);
    }

    #[test]
    fn test_single_deferred_card_is_returned() {
        let spec = DeckSpec::new().with(CardTemplate::new("pinned").deferred(), 1);
        let mut rng = GameRng::new(42);
        let mut deck = Deck::build(&spec, &mut rng).unwrap();

        for _ in 0..5 {
            let card = deck.draw(&mut rng).unwrap();
            assert_eq!(card.id, "pinned");
        }
    }

    #[test]
    fn test_deferred_card_yields_to_next() {
        // Whatever the shuffle, a deferred card at the front is never the
        // card handed out; the card behind it is.
        for seed in 0..50 {
            let spec = DeckSpec::new()
                .with(CardTemplate::new("pinned").deferred(), 1)
                .with(CardTemplate::new("plain"), 1);
            let mut rng = GameRng::new(seed);
            let mut deck = Deck::build(&spec, &mut rng).unwrap();

            let front_was_deferred = deck.draw_queue().next().unwrap().deferred;
            let card = deck.draw(&mut rng).unwrap();

            assert_eq!(card.id, "plain");
            if front_was_deferred {
                // The deferred card cycled to the back and is all that is left.
                assert_eq!(deck.remaining(), 1);
                assert_eq!(deck.draw_queue().next().unwrap().id, "pinned");
            }
        }
    }

    #[test]
    fn test_only_one_deferral_hop() {
        let spec = DeckSpec::new()
            .with(CardTemplate::new("x").deferred(), 1)
            .with(CardTemplate::new("y").deferred(), 1);
        let mut rng = GameRng::new(42);
        let mut deck = Deck::build(&spec, &mut rng).unwrap();

        let front = deck.draw_queue().next().unwrap().id.clone();
        let card = deck.draw(&mut rng).unwrap();

        // The second card is drawn even though it is deferred too.
        assert_ne!(card.id, front);
        assert!(card.deferred);
        assert_eq!(deck.remaining(), 1);
    }

    #[test]
    fn test_draw_never_mutates_population() {
        let spec = DeckSpec::new()
            .with(CardTemplate::new("a"), 3)
            .with(CardTemplate::new("b").deferred(), 2);
        let mut rng = GameRng::new(8);
        let mut deck = Deck::build(&spec, &mut rng).unwrap();
        let before = ids(deck.population());

        for _ in 0..40 {
            assert!(deck.draw(&mut rng).is_some());
        }

        assert_eq!(ids(deck.population()), before);
    }

    #[test]
    fn test_deck_spec_json_shape() {
        let json = r#"{
            "cards": [
                {"id": "go_back", "params": {"steps": 2}, "count": 3},
                {"id": "go_to_start", "pin_last": true},
                {"id": "lose_turn", "count": 2, "deferred": false}
            ]
        }"#;

        let spec: DeckSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.cards.len(), 3);
        assert_eq!(spec.cards[0].count, 3);
        assert_eq!(spec.cards[0].template.param("steps"), Some(2));
        assert_eq!(spec.cards[1].count, 1);
        assert!(spec.cards[1].template.deferred);
        assert_eq!(spec.population_size(), 6);
    }
}
