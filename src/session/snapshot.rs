//! Serializable session capture.
//!
//! A `SessionSnapshot` is a point-in-time view of a session for
//! persistence, debugging, or shell-side inspection. It captures the
//! observable state only; scheduled tasks are not part of it, so a
//! snapshot taken mid-mismatch records the two tiles as revealed and
//! the board as locked.

use serde::{Deserialize, Serialize};

use crate::core::{GameRngState, Phase, Tile};

use super::Session;

/// Point-in-time capture of a session's observable state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Session phase at capture time.
    pub phase: Phase,
    /// Pairs matched so far.
    pub matched_pairs: usize,
    /// Total pairs on the board.
    pub total_pairs: usize,
    /// Seconds remaining in the round.
    pub time_remaining_secs: u32,
    /// Configured round duration.
    pub duration_secs: u32,
    /// Whether flips are currently rejected.
    pub input_locked: bool,
    /// Every tile in board order.
    pub tiles: Vec<Tile>,
    /// RNG state, for shuffle reproducibility.
    pub rng: GameRngState,
}

impl Session {
    /// Capture the session's observable state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            matched_pairs: self.matched_pairs,
            total_pairs: self.total_pairs(),
            time_remaining_secs: self.timer.remaining_secs(),
            duration_secs: self.timer.duration_secs(),
            input_locked: self.resolver.is_locked(),
            tiles: self.deck.iter().cloned().collect(),
            rng: self.rng.state(),
        }
    }
}
