//! Card system: templates, decks, and display text.
//!
//! ## Key Types
//!
//! - `CardTemplate`: Immutable card data (effect id, params, deferred flag)
//! - `DeckSpec`: Declarative `{template, count}` list
//! - `Deck`: Card population plus shuffled draw queue
//! - `CardTextTable`: Title/description lookup with generic fallback

pub mod deck;
pub mod template;
pub mod text;

pub use deck::{Deck, DeckEntry, DeckKind, DeckSpec};
pub use template::{CardParams, CardTemplate};
pub use text::{CardFace, CardTextTable, TextSource, GENERIC_KEY};
