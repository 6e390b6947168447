//! Core types: tiles, decks, manifest, phase, RNG, configuration errors.

mod deck;
mod error;
mod manifest;
mod phase;
mod rng;
mod tile;

pub use deck::Deck;
pub use error::ConfigError;
pub use manifest::Manifest;
pub use phase::Phase;
pub use rng::{GameRng, GameRngState};
pub use tile::{PairId, Tile, TileId};
