//! Card display text.
//!
//! Text is looked up by `(space type, card id)`. When no specific list
//! exists the `(space type, "generic")` pool is used, and when that is
//! empty too a fixed default pair is shown. Running out of text is
//! logged and never interrupts play.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::SpaceType;
use crate::core::GameRng;

/// Key of the per-space fallback pool.
pub const GENERIC_KEY: &str = "generic";

/// Title shown when no text exists for a card.
pub const DEFAULT_TITLE: &str = "Pipeline Surprise";

/// Description shown when no text exists for a card.
pub const DEFAULT_DESCRIPTION: &str = "A shift in the pipeline changes your pace.";

/// One title/description pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    pub title: String,
    pub description: String,
}

impl CardFace {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// The last-resort pair.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_DESCRIPTION)
    }
}

/// Where a picked face came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSource {
    /// The card's own list.
    Specific,
    /// The space type's generic pool.
    Generic,
    /// The hard-coded default pair.
    Fallback,
}

/// Card text lookup: `space type → card id → [face]`.
///
/// ## Example
///
/// ```
/// use board_race::board::SpaceType;
/// use board_race::cards::{CardFace, CardTextTable, TextSource};
/// use board_race::core::GameRng;
///
/// let table = CardTextTable::new()
///     .with_text(SpaceType::Good, "generic", CardFace::new("Tailwind", "Things go well."));
///
/// let mut rng = GameRng::new(1);
/// let (face, source) = table.pick(SpaceType::Good, "extra_turn", &mut rng);
/// assert_eq!(face.title, "Tailwind");
/// assert_eq!(source, TextSource::Generic);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardTextTable {
    entries: FxHashMap<SpaceType, FxHashMap<String, Vec<CardFace>>>,
}

impl CardTextTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one face for `(space, card_id)` (builder pattern).
    #[must_use]
    pub fn with_text(mut self, space: SpaceType, card_id: impl Into<String>, face: CardFace) -> Self {
        self.insert(space, card_id, face);
        self
    }

    /// Add one face for `(space, card_id)`.
    pub fn insert(&mut self, space: SpaceType, card_id: impl Into<String>, face: CardFace) {
        self.entries
            .entry(space)
            .or_default()
            .entry(card_id.into())
            .or_default()
            .push(face);
    }

    /// Faces registered for `(space, card_id)`, empty if none.
    #[must_use]
    pub fn options(&self, space: SpaceType, card_id: &str) -> &[CardFace] {
        self.entries
            .get(&space)
            .and_then(|pool| pool.get(card_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Pick display text for a drawn card, uniformly among the options.
    ///
    /// An empty specific list counts as missing.
    pub fn pick(&self, space: SpaceType, card_id: &str, rng: &mut GameRng) -> (CardFace, TextSource) {
        if let Some(face) = rng.choose(self.options(space, card_id)) {
            return (face.clone(), TextSource::Specific);
        }
        if let Some(face) = rng.choose(self.options(space, GENERIC_KEY)) {
            return (face.clone(), TextSource::Generic);
        }

        log::warn!("no text for {} card '{}'; using default text", space, card_id);
        (CardFace::fallback(), TextSource::Fallback)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|pool| pool.values().all(Vec::is_empty))
    }
}
