//! Flip/match resolution.
//!
//! The resolver is the state machine over "currently revealed but
//! unconfirmed" tiles: empty, one tile pending, or two tiles resolving.
//! A second flip resolves immediately to a match or a mismatch; on a
//! mismatch the whole board locks until the session's delayed unflip
//! runs. At no instant are more than two tiles revealed and unmatched.
//!
//! Precondition violations are silent no-ops by design: a flip on a
//! matched tile, on the pending tile itself (rapid double-click), or
//! while the board is locked returns `FlipOutcome::Rejected` without
//! mutating anything.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::{Deck, TileId};

/// Result of a flip request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Precondition failed; nothing changed.
    Rejected,
    /// First tile of an attempt revealed, waiting for a second.
    FirstRevealed(TileId),
    /// Second flip completed a pair; both tiles are now permanently matched.
    Matched { first: TileId, second: TileId },
    /// Second flip did not match; the board is now locked and both
    /// tiles stay revealed until the delayed unflip.
    Mismatched { first: TileId, second: TileId },
}

/// State machine tracking at most one pending tile and the board lock.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FlipResolver {
    pending_first: Option<TileId>,
    input_locked: bool,
}

impl FlipResolver {
    /// Create a resolver with no pending tile and input unlocked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The revealed-but-unconfirmed tile, if any.
    #[must_use]
    pub fn pending_first(&self) -> Option<TileId> {
        self.pending_first
    }

    /// Are flip requests currently rejected?
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.input_locked
    }

    /// Attempt to flip a tile.
    ///
    /// The caller is responsible for the session-level precondition
    /// (phase must be Running); everything tile-level is checked here.
    pub fn request_flip(&mut self, deck: &mut Deck, tile_id: TileId) -> FlipOutcome {
        if self.input_locked {
            trace!("flip {} rejected: board locked", tile_id);
            return FlipOutcome::Rejected;
        }
        if self.pending_first == Some(tile_id) {
            trace!("flip {} rejected: already pending", tile_id);
            return FlipOutcome::Rejected;
        }

        let Some(tile) = deck.get(tile_id) else {
            trace!("flip {} rejected: no such tile", tile_id);
            return FlipOutcome::Rejected;
        };
        if tile.is_matched() {
            trace!("flip {} rejected: already matched", tile_id);
            return FlipOutcome::Rejected;
        }

        let pair = tile.pair;
        if let Some(tile) = deck.get_mut(tile_id) {
            tile.set_revealed(true);
        }

        let Some(first_id) = self.pending_first else {
            self.pending_first = Some(tile_id);
            return FlipOutcome::FirstRevealed(tile_id);
        };

        // Second tile: resolve immediately.
        self.pending_first = None;
        let first_pair = deck.get(first_id).map(|t| t.pair);

        if first_pair == Some(pair) {
            if let Some(first) = deck.get_mut(first_id) {
                first.set_matched();
            }
            if let Some(second) = deck.get_mut(tile_id) {
                second.set_matched();
            }
            FlipOutcome::Matched {
                first: first_id,
                second: tile_id,
            }
        } else {
            self.input_locked = true;
            FlipOutcome::Mismatched {
                first: first_id,
                second: tile_id,
            }
        }
    }

    /// Finish a mismatch: hide both tiles and unlock the board.
    pub fn complete_mismatch(&mut self, deck: &mut Deck, tiles: [TileId; 2]) {
        for id in tiles {
            if let Some(tile) = deck.get_mut(id) {
                tile.set_revealed(false);
            }
        }
        self.input_locked = false;
    }

    /// Lock the board permanently for this round (defeat).
    pub fn lock(&mut self) {
        self.input_locked = true;
    }

    /// Clear pending tile and unlock (new round).
    pub fn reset(&mut self) {
        self.pending_first = None;
        self.input_locked = false;
    }
}
