//! Deck generation and board state.
//!
//! A `Deck` is the full shuffled sequence of tiles for one round: two
//! tiles per configured pair, uniformly shuffled at generation time.
//! The deck is rebuilt wholesale on reset; tiles are never added or
//! removed mid-round.

use serde::{Deserialize, Serialize};

use super::manifest::Manifest;
use super::rng::GameRng;
use super::tile::{PairId, Tile, TileId};

/// The shuffled board for one round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    tiles: Vec<Tile>,
}

impl Deck {
    /// Generate a shuffled deck from the manifest.
    ///
    /// The result has `2 * manifest.pair_count()` tiles, each `PairId`
    /// appearing exactly twice, all face down. Tile IDs are assigned
    /// after shuffling, so they are stable board positions.
    #[must_use]
    pub fn generate(manifest: &Manifest, rng: &mut GameRng) -> Self {
        let pair_count = manifest.pair_count();

        let mut pairs: Vec<PairId> = Vec::with_capacity(pair_count * 2);
        for (pair, _) in manifest.iter() {
            pairs.push(pair);
            pairs.push(pair);
        }

        rng.shuffle(&mut pairs);

        let tiles = pairs
            .into_iter()
            .enumerate()
            .map(|(i, pair)| Tile::new(TileId::new(i as u16), pair))
            .collect();

        Self { tiles }
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the deck has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    /// Get a tile by ID.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id.index())
    }

    /// Iterate over all tiles in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    /// Count tiles currently revealed but not yet matched.
    ///
    /// Never exceeds 2: at most one pending tile plus the flip being
    /// resolved.
    #[must_use]
    pub fn revealed_unmatched_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.is_revealed() && !t.is_matched())
            .count()
    }
}
