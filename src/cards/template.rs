//! Card templates - static card data.
//!
//! A `CardTemplate` names an effect (`id`), carries the numeric
//! arguments for it (`params`) and the `deferred` draw bias. Templates
//! come from board-variant data and are never mutated.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Named numeric card arguments, e.g. `steps`.
pub type CardParams = FxHashMap<String, i64>;

/// Immutable card template.
///
/// ## Example
///
/// ```
/// use board_race::cards::CardTemplate;
///
/// let card = CardTemplate::new("go_back").with_param("steps", 2);
///
/// assert_eq!(card.param("steps"), Some(2));
/// assert!(!card.deferred);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Effect identifier, resolved through the effect catalog.
    pub id: String,

    /// Named numeric arguments for the effect.
    #[serde(default)]
    pub params: CardParams,

    /// Yield the top of a fresh draw to the next card.
    #[serde(default, alias = "pin_last")]
    pub deferred: bool,
}

impl CardTemplate {
    /// Create a template with no params.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: CardParams::default(),
            deferred: false,
        }
    }

    /// Add a numeric param (builder pattern).
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: i64) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    /// Mark the template as deferred.
    #[must_use]
    pub fn deferred(mut self) -> Self {
        self.deferred = true;
        self
    }

    /// Get a param value.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<i64> {
        self.params.get(key).copied()
    }

    /// Get a param value with a default.
    #[must_use]
    pub fn param_or(&self, key: &str, default: i64) -> i64 {
        self.param(key).unwrap_or(default)
    }
}
