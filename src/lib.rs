//! # pairmatch
//!
//! A headless memory-matching (concentration) game engine: a timed
//! single-player puzzle where the player flips paired tiles until all
//! pairs are matched or the countdown expires.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, assets, or input mapping. The engine
//!    is driven by a UI shell through `Session` and reports every
//!    visible transition through `SessionObserver`.
//!
//! 2. **One Session object**: Deck, resolver, and timer live behind a
//!    single explicit `Session` - no ambient globals. Reset rebuilds it
//!    in place.
//!
//! 3. **Deterministic time**: The engine never reads a wall clock. The
//!    shell reports elapsed milliseconds via `Session::advance`, and an
//!    internal virtual-time scheduler fires the 1-second ticks and the
//!    700 ms mismatch pause, so tests simulate instants exactly.
//!
//! 4. **Ignore, don't throw**: Only configuration problems are errors.
//!    Illegal transitions (double start, flips while locked) are silent
//!    no-ops, tolerating rapid or duplicate UI events.
//!
//! ## Modules
//!
//! - `core`: Tiles, decks, manifest, phase, deterministic RNG, errors
//! - `sched`: Virtual-time task scheduler with cancellation tokens
//! - `timer`: Round countdown and `MM:SS` display formatting
//! - `resolver`: Flip/match state machine
//! - `session`: Session controller and the observer interface
//!
//! ## Example
//!
//! ```
//! use pairmatch::{Manifest, NullObserver, Phase, Session, TileId};
//!
//! let manifest = Manifest::new(["assets/1.jpg", "assets/2.png"]).unwrap();
//! let mut session = Session::new(manifest, 60, 42).unwrap();
//! let mut view = NullObserver;
//!
//! session.start(&mut view);
//! assert_eq!(session.phase(), Phase::Running);
//!
//! session.request_flip(TileId::new(0), &mut view);
//! session.advance(1000, &mut view); // one second passes
//! assert_eq!(session.time_remaining_secs(), 59);
//! ```

pub mod core;
pub mod resolver;
pub mod sched;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{ConfigError, Deck, GameRng, GameRngState, Manifest, PairId, Phase, Tile, TileId};

pub use crate::resolver::{FlipOutcome, FlipResolver};

pub use crate::sched::{Scheduler, TaskHandle, TaskKind};

pub use crate::timer::{RoundTimer, TickOutcome, TimeDisplay, TICK_INTERVAL_MS};

pub use crate::session::{
    NullObserver, Session, SessionObserver, SessionSnapshot, MISMATCH_DELAY_MS,
};
