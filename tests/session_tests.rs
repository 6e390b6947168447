//! Session controller integration tests.
//!
//! These drive a full session through the public API and verify the
//! observable behavior: match/mismatch resolution, the win and lose
//! arbitration, and reset semantics.

use pairmatch::{
    Manifest, PairId, Phase, Session, SessionObserver, TileId, TimeDisplay,
};

/// Observer that records every callback for assertions.
#[derive(Default)]
struct Recorder {
    revealed: Vec<TileId>,
    hidden: Vec<TileId>,
    matched: Vec<TileId>,
    time_updates: Vec<TimeDisplay>,
    victories: usize,
    defeats: usize,
    defeat_board: Vec<(TileId, PairId)>,
    duration_locks: Vec<bool>,
}

impl SessionObserver for Recorder {
    fn tile_revealed(&mut self, tile: TileId) {
        self.revealed.push(tile);
    }

    fn tile_hidden(&mut self, tile: TileId) {
        self.hidden.push(tile);
    }

    fn tile_matched(&mut self, tile: TileId) {
        self.matched.push(tile);
    }

    fn time_updated(&mut self, time: TimeDisplay) {
        self.time_updates.push(time);
    }

    fn victory(&mut self) {
        self.victories += 1;
    }

    fn defeat(&mut self, board: &[(TileId, PairId)]) {
        self.defeats += 1;
        self.defeat_board = board.to_vec();
    }

    fn duration_lock_changed(&mut self, locked: bool) {
        self.duration_locks.push(locked);
    }
}

fn session(pairs: usize, duration: u32) -> Session {
    let manifest = Manifest::new((0..pairs).map(|i| format!("img-{}", i))).unwrap();
    Session::new(manifest, duration, 42).unwrap()
}

/// Board positions of the two tiles in a pair.
fn tiles_of_pair(session: &Session, pair: PairId) -> (TileId, TileId) {
    let ids: Vec<TileId> = session
        .deck()
        .iter()
        .filter(|t| t.pair == pair)
        .map(|t| t.id)
        .collect();
    assert_eq!(ids.len(), 2, "every pair has exactly two tiles");
    (ids[0], ids[1])
}

/// Match every pair on the board.
fn match_all_pairs(session: &mut Session, obs: &mut Recorder) {
    for pair in 0..session.total_pairs() {
        let (a, b) = tiles_of_pair(session, PairId::new(pair as u32));
        session.request_flip(a, obs);
        session.request_flip(b, obs);
    }
}

/// Scenario A: flipping both tiles of a pair matches them.
#[test]
fn test_matching_a_pair() {
    let mut session = session(2, 30);
    let mut obs = Recorder::default();
    session.start(&mut obs);

    let (a, b) = tiles_of_pair(&session, PairId::new(0));

    session.request_flip(a, &mut obs);
    assert_eq!(session.pending_tile(), Some(a));
    assert_eq!(session.matched_pairs(), 0);
    assert!(obs.matched.is_empty());

    session.request_flip(b, &mut obs);
    assert_eq!(session.matched_pairs(), 1);
    assert_eq!(session.pending_tile(), None);
    assert!(!session.is_input_locked());
    assert!(session.deck().get(a).unwrap().is_matched());
    assert!(session.deck().get(b).unwrap().is_matched());
    assert_eq!(obs.matched, vec![a, b]);
    assert_eq!(obs.revealed, vec![a, b]);
}

/// Flipping an already-matched tile never changes state or fires callbacks.
#[test]
fn test_matched_tiles_are_inert() {
    let mut session = session(2, 30);
    let mut obs = Recorder::default();
    session.start(&mut obs);

    let (a, b) = tiles_of_pair(&session, PairId::new(0));
    session.request_flip(a, &mut obs);
    session.request_flip(b, &mut obs);

    let revealed_before = obs.revealed.len();
    let matched_before = obs.matched.len();

    session.request_flip(a, &mut obs);
    session.request_flip(b, &mut obs);

    assert_eq!(session.matched_pairs(), 1);
    assert_eq!(session.pending_tile(), None);
    assert_eq!(obs.revealed.len(), revealed_before);
    assert_eq!(obs.matched.len(), matched_before);
}

/// Scenario B: a mismatch locks the board, and 700 ms later both tiles
/// flip back and input unlocks.
#[test]
fn test_mismatch_locks_then_unflips() {
    let mut session = session(2, 30);
    let mut obs = Recorder::default();
    session.start(&mut obs);

    let (x, _) = tiles_of_pair(&session, PairId::new(0));
    let (y, _) = tiles_of_pair(&session, PairId::new(1));

    session.request_flip(x, &mut obs);
    session.request_flip(y, &mut obs);

    assert!(session.is_input_locked());
    assert_eq!(session.matched_pairs(), 0);
    assert!(session.deck().get(x).unwrap().is_revealed());
    assert!(session.deck().get(y).unwrap().is_revealed());

    session.advance(700, &mut obs);

    assert!(!session.is_input_locked());
    assert_eq!(session.pending_tile(), None);
    assert!(!session.deck().get(x).unwrap().is_revealed());
    assert!(!session.deck().get(y).unwrap().is_revealed());
    assert_eq!(obs.hidden, vec![x, y]);
}

/// Never more than two tiles revealed-and-unmatched, whatever the player
/// hammers on.
#[test]
fn test_at_most_two_revealed_unmatched() {
    let mut session = session(4, 60);
    let mut obs = Recorder::default();
    session.start(&mut obs);

    let all_tiles: Vec<TileId> = session.deck().iter().map(|t| t.id).collect();
    for &tile in &all_tiles {
        session.request_flip(tile, &mut obs);
        assert!(session.deck().revealed_unmatched_count() <= 2);
    }
}

/// Scenario D: matching every pair wins, stops the timer, and fires
/// victory exactly once.
#[test]
fn test_victory() {
    let mut session = session(3, 60);
    let mut obs = Recorder::default();
    session.start(&mut obs);
    session.advance(2000, &mut obs);

    match_all_pairs(&mut session, &mut obs);

    assert_eq!(session.phase(), Phase::Won);
    assert_eq!(session.matched_pairs(), session.total_pairs());
    assert_eq!(obs.victories, 1);
    assert_eq!(obs.defeats, 0);

    // Timer stopped: subsequent ticks produce no time updates
    let updates_before = obs.time_updates.len();
    session.advance(10_000, &mut obs);
    assert_eq!(obs.time_updates.len(), updates_before);
    assert_eq!(session.time_remaining_secs(), 58);
}

/// Terminal phases ignore further flips.
#[test]
fn test_no_flips_after_victory() {
    let mut session = session(2, 60);
    let mut obs = Recorder::default();
    session.start(&mut obs);
    match_all_pairs(&mut session, &mut obs);
    assert_eq!(session.phase(), Phase::Won);

    let revealed_before = obs.revealed.len();
    for tile in session.deck().iter().map(|t| t.id).collect::<Vec<_>>() {
        session.request_flip(tile, &mut obs);
    }
    assert_eq!(obs.revealed.len(), revealed_before);
    assert_eq!(obs.victories, 1);
}

/// Scenario C: expiry with unmatched pairs loses, reveals the board,
/// and fires defeat exactly once.
#[test]
fn test_defeat_on_expiry() {
    let mut session = session(3, 5);
    let mut obs = Recorder::default();
    session.start(&mut obs);

    for _ in 0..5 {
        session.advance(1000, &mut obs);
    }

    assert_eq!(session.phase(), Phase::Lost);
    assert_eq!(obs.defeats, 1);
    assert_eq!(obs.victories, 0);
    assert_eq!(session.time_remaining_secs(), 0);

    // Full board revealed and reported
    assert!(session.deck().iter().all(|t| t.is_revealed()));
    assert_eq!(obs.defeat_board.len(), session.deck().len());
    for (id, pair) in &obs.defeat_board {
        assert_eq!(session.deck().get(*id).unwrap().pair, *pair);
    }

    // Input permanently locked for this round
    assert!(session.is_input_locked());
    let revealed_before = obs.revealed.len();
    session.request_flip(TileId::new(0), &mut obs);
    assert_eq!(obs.revealed.len(), revealed_before);
}

/// Extra time past expiry never underflows or re-fires defeat.
#[test]
fn test_expiry_fires_once_and_clamps() {
    let mut session = session(2, 3);
    let mut obs = Recorder::default();
    session.start(&mut obs);

    session.advance(60_000, &mut obs);

    assert_eq!(session.phase(), Phase::Lost);
    assert_eq!(obs.defeats, 1);
    assert_eq!(session.time_remaining_secs(), 0);
    assert!(obs
        .time_updates
        .iter()
        .all(|t| t.minutes == 0 && t.seconds <= 3));
}

/// Scenario E: reset from a terminal phase returns to Idle with a fresh
/// board of the same size.
#[test]
fn test_reset_from_won() {
    let mut session = session(2, 60);
    let mut obs = Recorder::default();
    session.start(&mut obs);
    match_all_pairs(&mut session, &mut obs);
    assert_eq!(session.phase(), Phase::Won);

    session.reset(&mut obs);

    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.matched_pairs(), 0);
    assert_eq!(session.deck().len(), 4);
    assert!(session.deck().iter().all(|t| !t.is_revealed() && !t.is_matched()));
    assert_eq!(session.time_remaining_secs(), 60);
}

#[test]
fn test_reset_from_lost() {
    let mut session = session(2, 2);
    let mut obs = Recorder::default();
    session.start(&mut obs);
    session.advance(2000, &mut obs);
    assert_eq!(session.phase(), Phase::Lost);

    session.reset(&mut obs);

    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.matched_pairs(), 0);
    assert!(!session.is_input_locked());
    assert!(session.deck().iter().all(|t| !t.is_revealed()));

    // The fresh round is fully playable
    session.start(&mut obs);
    assert_eq!(session.phase(), Phase::Running);
    let (a, b) = tiles_of_pair(&session, PairId::new(0));
    session.request_flip(a, &mut obs);
    session.request_flip(b, &mut obs);
    assert_eq!(session.matched_pairs(), 1);
}

/// Duration selection locks while Running and unlocks on both terminal
/// transitions and reset.
#[test]
fn test_duration_lock_signals() {
    let mut session = session(2, 60);
    let mut obs = Recorder::default();

    session.start(&mut obs);
    assert_eq!(obs.duration_locks, vec![true]);

    match_all_pairs(&mut session, &mut obs);
    assert_eq!(obs.duration_locks, vec![true, false]);

    session.reset(&mut obs);
    assert_eq!(obs.duration_locks, vec![true, false, false]);
}

/// Changing duration in a terminal phase takes effect on the next round.
#[test]
fn test_duration_change_after_terminal() {
    let mut session = session(2, 2);
    let mut obs = Recorder::default();
    session.start(&mut obs);
    session.advance(2000, &mut obs);
    assert_eq!(session.phase(), Phase::Lost);

    session.set_duration(90, &mut obs).unwrap();
    assert_eq!(
        *obs.time_updates.last().unwrap(),
        TimeDisplay::from_secs(90)
    );

    session.reset(&mut obs);
    session.start(&mut obs);
    assert_eq!(session.time_remaining_secs(), 90);
}
