//! Game session controller.
//!
//! The `Session` owns everything for one player's game: the manifest,
//! the shuffled deck, the flip resolver, the round timer, and the task
//! scheduler. It is the single entry point for the embedding shell:
//! flip requests come in via `request_flip`, wall-clock time via
//! `advance`, and every externally visible transition goes out through
//! a `SessionObserver`.
//!
//! ## Phases
//!
//! `Idle -> Running -> {Won, Lost}`, with `reset` returning to Idle
//! from anywhere. Won and Lost are strictly terminal: no flip or tick
//! affects state once entered.
//!
//! ## Re-entry safety
//!
//! Everything runs on one logical thread, but flips, timer ticks, and
//! the delayed mismatch unflip interleave at entry-point boundaries, so
//! each entry point re-validates phase and lock state. One-shot unflip
//! tasks are tagged with a round generation counter; a task scheduled
//! by a superseded round is discarded instead of mutating a freshly
//! reset board.

mod observer;
mod snapshot;

pub use observer::{NullObserver, SessionObserver};
pub use snapshot::SessionSnapshot;

use log::{debug, info};

use crate::core::{ConfigError, Deck, GameRng, Manifest, PairId, Phase, TileId};
use crate::resolver::{FlipOutcome, FlipResolver};
use crate::sched::{Scheduler, TaskKind};
use crate::timer::{RoundTimer, TimeDisplay};

/// How long mismatched tiles stay revealed before flipping back.
///
/// A deliberate UX pause: the player gets to memorize the two wrong
/// cards. The board is locked for the whole window but the timer keeps
/// running.
pub const MISMATCH_DELAY_MS: u64 = 700;

/// One player's game: deck, resolver, timer, and phase.
#[derive(Debug)]
pub struct Session {
    manifest: Manifest,
    deck: Deck,
    resolver: FlipResolver,
    timer: RoundTimer,
    sched: Scheduler,
    rng: GameRng,
    phase: Phase,
    matched_pairs: usize,
    /// Bumped on every reset; stale one-shot tasks carry the old value.
    generation: u64,
}

impl Session {
    /// Create a session in Idle with a freshly shuffled board.
    ///
    /// Fails with `ConfigError::NonPositiveDuration` if the duration is
    /// zero. Manifest validity is enforced by `Manifest::new`.
    pub fn new(
        manifest: Manifest,
        duration_secs: u32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if duration_secs == 0 {
            return Err(ConfigError::NonPositiveDuration(duration_secs));
        }

        let mut rng = GameRng::new(seed);
        let deck = Deck::generate(&manifest, &mut rng);

        info!(
            "session created: {} pairs, {}s round",
            manifest.pair_count(),
            duration_secs
        );

        Ok(Self {
            manifest,
            deck,
            resolver: FlipResolver::new(),
            timer: RoundTimer::new(duration_secs),
            sched: Scheduler::new(),
            rng,
            phase: Phase::Idle,
            matched_pairs: 0,
            generation: 0,
        })
    }

    // === Accessors ===

    /// Current session phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pairs matched so far this round.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Total pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.deck.pair_count()
    }

    /// Seconds remaining in the round.
    #[must_use]
    pub fn time_remaining_secs(&self) -> u32 {
        self.timer.remaining_secs()
    }

    /// Remaining time as zero-padded display components.
    #[must_use]
    pub fn time_display(&self) -> TimeDisplay {
        self.timer.display()
    }

    /// Configured round duration in seconds.
    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.timer.duration_secs()
    }

    /// The board for this round.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The configured identifier manifest.
    #[must_use]
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Are flip requests currently rejected?
    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.resolver.is_locked()
    }

    /// The revealed-but-unconfirmed tile, if any.
    #[must_use]
    pub fn pending_tile(&self) -> Option<TileId> {
        self.resolver.pending_first()
    }

    // === Configuration ===

    /// Change the round duration.
    ///
    /// Accepted while Idle or in a terminal phase (the next round uses
    /// it); emits `time_updated` immediately so the view can refresh.
    /// Silently ignored while Running - duration is locked mid-round.
    pub fn set_duration(
        &mut self,
        duration_secs: u32,
        observer: &mut dyn SessionObserver,
    ) -> Result<(), ConfigError> {
        if duration_secs == 0 {
            return Err(ConfigError::NonPositiveDuration(duration_secs));
        }
        if self.phase.is_running() {
            debug!("set_duration ignored: round is running");
            return Ok(());
        }

        self.timer.configure(duration_secs);
        observer.time_updated(self.timer.display());
        Ok(())
    }

    // === Round control ===

    /// Start the round. Valid only from Idle; a no-op otherwise.
    pub fn start(&mut self, observer: &mut dyn SessionObserver) {
        if self.phase != Phase::Idle {
            debug!("start ignored in phase {}", self.phase);
            return;
        }

        self.phase = Phase::Running;
        self.timer.start(&mut self.sched);
        observer.duration_lock_changed(true);
        observer.time_updated(self.timer.display());
        info!("round started: {}s on the clock", self.timer.duration_secs());
    }

    /// Reset to Idle with a freshly shuffled board of the same size.
    ///
    /// Valid from any phase. Cancels every scheduled task and bumps the
    /// round generation so in-flight one-shots from the old round are
    /// discarded when they come due.
    pub fn reset(&mut self, observer: &mut dyn SessionObserver) {
        self.generation += 1;
        self.sched.clear();
        self.timer.detach();

        self.deck = Deck::generate(&self.manifest, &mut self.rng);
        self.resolver.reset();
        self.matched_pairs = 0;
        self.timer.configure(self.timer.duration_secs());
        self.phase = Phase::Idle;

        observer.duration_lock_changed(false);
        observer.time_updated(self.timer.display());
        info!("session reset to Idle (generation {})", self.generation);
    }

    // === Player input ===

    /// Flip a tile by board position.
    ///
    /// A no-op unless the round is Running; tile-level preconditions
    /// (matched tile, pending tile, locked board) are the resolver's.
    pub fn request_flip(&mut self, tile: TileId, observer: &mut dyn SessionObserver) {
        if !self.phase.is_running() {
            debug!("flip {} ignored in phase {}", tile, self.phase);
            return;
        }

        match self.resolver.request_flip(&mut self.deck, tile) {
            FlipOutcome::Rejected => {}
            FlipOutcome::FirstRevealed(tile) => {
                observer.tile_revealed(tile);
            }
            FlipOutcome::Matched { first, second } => {
                observer.tile_revealed(second);
                observer.tile_matched(first);
                observer.tile_matched(second);

                self.matched_pairs += 1;
                debug!(
                    "pair matched: {}/{} ({} + {})",
                    self.matched_pairs,
                    self.total_pairs(),
                    first,
                    second
                );

                if self.matched_pairs == self.total_pairs() {
                    self.win(observer);
                }
            }
            FlipOutcome::Mismatched { first, second } => {
                observer.tile_revealed(second);
                debug!("mismatch: {} vs {}, board locked", first, second);
                self.sched.schedule_once(
                    MISMATCH_DELAY_MS,
                    TaskKind::MismatchUnflip {
                        tiles: [first, second],
                        generation: self.generation,
                    },
                );
            }
        }
    }

    // === Time ===

    /// Advance the session clock by `elapsed_ms`, firing due tasks in
    /// order.
    ///
    /// This is the only place wall-clock time enters the engine; the
    /// shell calls it from its own frame loop or timer source. Tests
    /// call it with exact simulated instants.
    pub fn advance(&mut self, elapsed_ms: u64, observer: &mut dyn SessionObserver) {
        let target = self.sched.now_ms() + elapsed_ms;

        while let Some(task) = self.sched.pop_due(target) {
            self.dispatch(task, observer);
        }

        self.sched.advance_to(target);
    }

    fn dispatch(&mut self, task: TaskKind, observer: &mut dyn SessionObserver) {
        match task {
            TaskKind::TimerTick => {
                // A stray tick outliving a win or reset is a no-op.
                if !self.phase.is_running() {
                    return;
                }

                let outcome = self.timer.tick();
                observer.time_updated(self.timer.display());

                if outcome.expired {
                    self.lose(observer);
                }
            }
            TaskKind::MismatchUnflip { tiles, generation } => {
                // Stale tasks from a superseded round, or tasks overtaken
                // by defeat, must not touch the board.
                if generation != self.generation || !self.phase.is_running() {
                    debug!("discarding stale mismatch unflip (generation {})", generation);
                    return;
                }

                self.resolver.complete_mismatch(&mut self.deck, tiles);
                observer.tile_hidden(tiles[0]);
                observer.tile_hidden(tiles[1]);
            }
        }
    }

    // === Terminal transitions ===

    fn win(&mut self, observer: &mut dyn SessionObserver) {
        self.phase = Phase::Won;
        self.timer.stop(&mut self.sched);
        observer.duration_lock_changed(false);
        observer.victory();
        info!(
            "victory with {} remaining",
            self.timer.display()
        );
    }

    fn lose(&mut self, observer: &mut dyn SessionObserver) {
        self.phase = Phase::Lost;
        self.timer.stop(&mut self.sched);
        self.resolver.lock();

        // Show the player the full board.
        let mut board: Vec<(TileId, PairId)> = Vec::with_capacity(self.deck.len());
        let mut newly_revealed = Vec::new();
        for tile in self.deck.iter_mut() {
            if !tile.is_revealed() {
                tile.set_revealed(true);
                newly_revealed.push(tile.id);
            }
            board.push((tile.id, tile.pair));
        }
        for tile in newly_revealed {
            observer.tile_revealed(tile);
        }

        observer.duration_lock_changed(false);
        observer.defeat(&board);
        info!(
            "defeat: {}/{} pairs matched",
            self.matched_pairs,
            self.deck.pair_count()
        );
    }
}
