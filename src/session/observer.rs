//! Presentation interface.
//!
//! The engine is headless; a view layer implements `SessionObserver`
//! and receives every externally visible transition. All methods
//! default to no-ops so shells only implement what they render.

use crate::core::{PairId, TileId};
use crate::timer::TimeDisplay;

/// Callbacks from the session to its presentation layer.
///
/// `victory` and `defeat` fire exactly once per round, on the terminal
/// transition. `defeat` supplies the whole board (position + pair) so
/// the view can reveal the remaining tiles.
pub trait SessionObserver {
    /// A tile's face was just shown.
    fn tile_revealed(&mut self, tile: TileId) {
        let _ = tile;
    }

    /// A tile's face was just hidden (mismatch unflip).
    fn tile_hidden(&mut self, tile: TileId) {
        let _ = tile;
    }

    /// A tile became permanently matched.
    fn tile_matched(&mut self, tile: TileId) {
        let _ = tile;
    }

    /// The remaining time changed.
    fn time_updated(&mut self, time: TimeDisplay) {
        let _ = time;
    }

    /// All pairs matched before expiry.
    fn victory(&mut self) {}

    /// The timer expired with pairs still unmatched.
    fn defeat(&mut self, board: &[(TileId, PairId)]) {
        let _ = board;
    }

    /// Whether the duration selection should be disabled in the UI
    /// (true once Running, false when Idle or terminal).
    fn duration_lock_changed(&mut self, locked: bool) {
        let _ = locked;
    }
}

/// Observer that ignores everything. Useful for headless driving.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl SessionObserver for NullObserver {}
