//! Board layout.
//!
//! A board is a fixed line of classified spaces. Decks are attached at
//! the variant level, not per space.

mod model;
mod space;

pub use model::{BoardModel, BoardVariant};
pub use space::SpaceType;
