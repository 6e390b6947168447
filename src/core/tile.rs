//! Tile data model.
//!
//! Every card on the board is a `Tile`: a position (`TileId`), the pair
//! it belongs to (`PairId`), and two flags. `revealed` toggles as the
//! player flips; `matched` is terminal - once set it never reverts and
//! the tile ignores further flip requests.
//!
//! Tiles are created in bulk when a deck is generated and replaced
//! wholesale on reset; there is no partial creation or removal during
//! a round.

use serde::{Deserialize, Serialize};

/// Position of a tile within the deck.
///
/// Tile IDs are deck indices: `0..deck.len()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the deck index for this tile.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Identifier of an image pair.
///
/// Exactly two tiles in a deck share each `PairId`. The `Manifest` maps
/// pair IDs back to the configured identifier strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// One card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Position within the deck.
    pub id: TileId,
    /// The pair this tile belongs to.
    pub pair: PairId,
    revealed: bool,
    matched: bool,
}

impl Tile {
    /// Create a face-down, unmatched tile.
    #[must_use]
    pub fn new(id: TileId, pair: PairId) -> Self {
        Self {
            id,
            pair,
            revealed: false,
            matched: false,
        }
    }

    /// Is the tile face currently shown?
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Has the tile been permanently matched?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub(crate) fn set_revealed(&mut self, revealed: bool) {
        self.revealed = revealed;
    }

    /// Mark the tile as matched. Matched tiles stay revealed and inert.
    pub(crate) fn set_matched(&mut self) {
        self.matched = true;
        self.revealed = true;
    }
}
