//! Board model and board variants.

use serde::{Deserialize, Serialize};

use super::space::SpaceType;
use crate::cards::DeckSpec;
use crate::core::{ConfigError, Result};
use crate::effects::EffectCatalog;

/// Immutable board layout.
///
/// Always at least 2 spaces, starting with `Start` and ending with
/// `Terminal`. Interior `Start`/`Terminal` spaces behave like neutral ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct BoardModel {
    spaces: Vec<SpaceType>,
}

#[derive(Serialize, Deserialize)]
struct RawBoard {
    spaces: Vec<SpaceType>,
}

impl TryFrom<RawBoard> for BoardModel {
    type Error = ConfigError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        Self::new(raw.spaces)
    }
}

impl From<BoardModel> for RawBoard {
    fn from(board: BoardModel) -> Self {
        Self { spaces: board.spaces }
    }
}

impl BoardModel {
    /// Create a board, checking its shape.
    pub fn new(spaces: Vec<SpaceType>) -> Result<Self> {
        if spaces.len() < 2 {
            return Err(ConfigError::BoardTooShort { len: spaces.len() });
        }
        if spaces[0] != SpaceType::Start {
            return Err(ConfigError::InvalidStart { found: spaces[0] });
        }
        let last = spaces[spaces.len() - 1];
        if last != SpaceType::Terminal {
            return Err(ConfigError::InvalidTerminal { found: last });
        }
        Ok(Self { spaces })
    }

    /// Number of spaces, `N`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Always false; a board has at least two spaces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Index of the terminal space, `N - 1`.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.spaces.len() - 1
    }

    /// Classification of the space at `index`.
    #[must_use]
    pub fn space(&self, index: usize) -> Option<SpaceType> {
        self.spaces.get(index).copied()
    }

    #[must_use]
    pub fn spaces(&self) -> &[SpaceType] {
        &self.spaces
    }

    #[must_use]
    pub fn is_terminal(&self, index: usize) -> bool {
        index == self.last_index()
    }

    /// Clamp a signed position into `[0, N-1]`.
    #[must_use]
    pub fn clamp(&self, position: i64) -> usize {
        position.clamp(0, self.last_index() as i64) as usize
    }

    /// Clamp `from + delta` into the board.
    #[must_use]
    pub fn offset(&self, from: usize, delta: i64) -> usize {
        self.clamp((from as i64).saturating_add(delta))
    }

    /// First neutral space after `from`, or the terminal if none remain.
    #[must_use]
    pub fn next_neutral(&self, from: usize) -> usize {
        ((from + 1)..self.last_index())
            .find(|&i| self.spaces[i] == SpaceType::Neutral)
            .unwrap_or_else(|| self.last_index())
    }
}

fn default_name() -> String {
    "Custom Variant".to_string()
}

/// A playable board: layout plus the good and bad deck specs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardVariant {
    #[serde(default = "default_name")]
    pub name: String,
    pub board: BoardModel,
    pub good_deck: DeckSpec,
    pub bad_deck: DeckSpec,
}

impl BoardVariant {
    /// Create a variant.
    pub fn new(name: impl Into<String>, board: BoardModel, good_deck: DeckSpec, bad_deck: DeckSpec) -> Self {
        Self {
            name: name.into(),
            board,
            good_deck,
            bad_deck,
        }
    }

    /// Check deck counts and card params.
    ///
    /// Board shape is already enforced by `BoardModel`.
    pub fn validate(&self) -> Result<()> {
        for entry in self.good_deck.cards.iter().chain(&self.bad_deck.cards) {
            if entry.count < 0 {
                return Err(ConfigError::NegativeCount {
                    card: entry.template.id.clone(),
                    count: entry.count,
                });
            }
            EffectCatalog::validate(&entry.template)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardTemplate;

    use SpaceType::*;

    fn board() -> BoardModel {
        BoardModel::new(vec![Start, Good, Neutral, Bad, Neutral, Good, Terminal]).unwrap()
    }

    #[test]
    fn test_board_shape() {
        let b = board();
        assert_eq!(b.len(), 7);
        assert_eq!(b.last_index(), 6);
        assert_eq!(b.space(3), Some(Bad));
        assert_eq!(b.space(7), None);
        assert!(b.is_terminal(6));
        assert!(!b.is_terminal(5));
    }

    #[test]
    fn test_board_rejects_bad_shapes() {
        assert_eq!(
            BoardModel::new(vec![Start]).unwrap_err(),
            ConfigError::BoardTooShort { len: 1 }
        );
        assert_eq!(
            BoardModel::new(vec![]).unwrap_err(),
            ConfigError::BoardTooShort { len: 0 }
        );
        assert_eq!(
            BoardModel::new(vec![Neutral, Terminal]).unwrap_err(),
            ConfigError::InvalidStart { found: Neutral }
        );
        assert_eq!(
            BoardModel::new(vec![Start, Good]).unwrap_err(),
            ConfigError::InvalidTerminal { found: Good }
        );
        assert!(BoardModel::new(vec![Start, Terminal]).is_ok());
    }

    #[test]
    fn test_clamp_and_offset() {
        let b = board();
        assert_eq!(b.clamp(-4), 0);
        assert_eq!(b.clamp(3), 3);
        assert_eq!(b.clamp(99), 6);
        assert_eq!(b.offset(4, 20), 6);
        assert_eq!(b.offset(2, -5), 0);
        assert_eq!(b.offset(2, 1), 3);
        assert_eq!(b.offset(2, i64::MAX), 6);
    }

    #[test]
    fn test_next_neutral() {
        let b = board();
        assert_eq!(b.next_neutral(0), 2);
        assert_eq!(b.next_neutral(2), 4);
        // Nothing neutral after 4: go to the terminal
        assert_eq!(b.next_neutral(4), 6);
    }

    #[test]
    fn test_variant_validate() {
        let good = DeckSpec::new().with(CardTemplate::new("extra_turn"), 2);
        let bad = DeckSpec::new().with(CardTemplate::new("go_back").with_param("steps", 2), 2);
        let variant = BoardVariant::new("Test", board(), good.clone(), bad);
        assert!(variant.validate().is_ok());

        let missing = DeckSpec::new().with(CardTemplate::new("go_back"), 1);
        let variant = BoardVariant::new("Test", board(), good.clone(), missing);
        assert!(matches!(variant.validate(), Err(ConfigError::MissingParam { .. })));

        let negative = DeckSpec::new().with(CardTemplate::new("lose_turn"), -2);
        let variant = BoardVariant::new("Test", board(), good, negative);
        assert!(matches!(variant.validate(), Err(ConfigError::NegativeCount { count: -2, .. })));
    }

    #[test]
    fn test_variant_from_json() {
        let json = r#"{
            "name": "Short Track",
            "board": {"spaces": ["start", "good", "bad", "neutral", "end"]},
            "good_deck": {"cards": [{"id": "jump_forward", "params": {"steps": 2}, "count": 2}]},
            "bad_deck": {"cards": [{"id": "go_to_start", "count": 1, "pin_last": true}]}
        }"#;

        let variant: BoardVariant = serde_json::from_str(json).unwrap();

        assert_eq!(variant.name, "Short Track");
        assert_eq!(variant.board.len(), 5);
        assert_eq!(variant.board.space(4), Some(Terminal));
        assert_eq!(variant.good_deck.population_size(), 2);
        assert!(variant.bad_deck.cards[0].template.deferred);
        assert!(variant.validate().is_ok());
    }

    #[test]
    fn test_variant_json_rejects_bad_board() {
        let json = r#"{
            "board": {"spaces": ["good", "end"]},
            "good_deck": {"cards": []},
            "bad_deck": {"cards": []}
        }"#;

        assert!(serde_json::from_str::<BoardVariant>(json).is_err());
    }
}
