//! Space classifications.

use serde::{Deserialize, Serialize};

/// Classification of one board space.
///
/// Only `Good` and `Bad` draw cards. Space 0 is always `Start` and the
/// last space is always `Terminal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceType {
    Start,
    Good,
    Bad,
    Neutral,
    #[serde(alias = "end")]
    Terminal,
}

impl SpaceType {
    /// Does landing here draw a card?
    #[must_use]
    pub const fn draws_card(self) -> bool {
        matches!(self, SpaceType::Good | SpaceType::Bad)
    }

    /// Lowercase name, as used in data files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SpaceType::Start => "start",
            SpaceType::Good => "good",
            SpaceType::Bad => "bad",
            SpaceType::Neutral => "neutral",
            SpaceType::Terminal => "terminal",
        }
    }
}

impl std::fmt::Display for SpaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
