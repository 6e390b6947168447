//! Session phase.
//!
//! A round moves `Idle -> Running -> {Won, Lost}`. Won and Lost are
//! mutually exclusive terminal phases reachable only from Running; an
//! explicit reset returns the session to Idle with a fresh board.

use serde::{Deserialize, Serialize};

/// Top-level state of a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Board built, timer configured, waiting for `start`.
    Idle,
    /// Round in progress: flips accepted, timer ticking.
    Running,
    /// All pairs matched before the timer expired.
    Won,
    /// Timer expired with pairs still unmatched.
    Lost,
}

impl Phase {
    /// Check if this is a terminal phase (Won or Lost).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }

    /// Check if the round is in progress.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Phase::Running)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "Idle",
            Phase::Running => "Running",
            Phase::Won => "Won",
            Phase::Lost => "Lost",
        };
        write!(f, "{}", name)
    }
}
