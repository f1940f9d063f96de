//! Session tests - full play-throughs against the engine invariants

use bird_city::core::{calculate_score, GamePhase, GameSession};
use bird_city::persist::{decode, encode, SavedGame, Stats};
use bird_city::types::{Terrain, COLS, ROWS};

/// Greedy player: place the in-hand tile at the first legal anchor across
/// all rotations, skipping when nothing fits.
fn play_greedy(session: &mut GameSession) {
    while session.phase() == GamePhase::InProgress {
        let mut placed = false;
        'search: for _ in 0..4 {
            for row in 0..ROWS as i8 {
                for col in 0..COLS as i8 {
                    if session.can_place_current(row, col) {
                        assert!(session.place_current(row, col).is_some());
                        placed = true;
                        break 'search;
                    }
                }
            }
            session.rotate_current();
        }
        if !placed && !session.skip_current() {
            session.end_early();
        }
    }
}

#[test]
fn test_full_game_never_violates_grid_invariants() {
    for puzzle in 0..20u32 {
        let mut session = GameSession::new(puzzle, false);
        session.start();
        play_greedy(&mut session);

        assert_eq!(session.phase(), GamePhase::Finished);
        let grid = session.grid();
        for row in 0..ROWS as i8 {
            for col in 0..COLS as i8 {
                let cell = grid.get(row, col).unwrap();
                if cell.terrain == Terrain::River {
                    assert_eq!(cell.building, None, "river built over at ({},{})", row, col);
                }
            }
        }
    }
}

#[test]
fn test_identical_play_produces_identical_results() {
    let mut a = GameSession::new(11, false);
    let mut b = GameSession::new(11, false);
    a.start();
    b.start();
    play_greedy(&mut a);
    play_greedy(&mut b);

    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.score(), b.score());
}

#[test]
fn test_running_score_matches_standalone_scoring() {
    let mut session = GameSession::new(4, false);
    session.start();
    play_greedy(&mut session);

    let expected = calculate_score(session.grid(), session.skipped_count());
    assert_eq!(session.score(), expected);
}

#[test]
fn test_mid_game_save_resume_continues_identically() {
    let mut original = GameSession::new(13, false);
    original.start();

    // Consume a few tiles, then save.
    for _ in 0..3 {
        assert!(original.skip_current());
    }
    let raw = encode(&original.to_saved()).unwrap();

    // Storage round-trip, then play both copies the same way.
    let saved: SavedGame = decode(&raw).expect("saved game failed to decode");
    let mut resumed = GameSession::resume(&saved).expect("resume failed");

    play_greedy(&mut original);
    play_greedy(&mut resumed);

    assert_eq!(original.grid(), resumed.grid());
    assert_eq!(original.score().total, resumed.score().total);
}

#[test]
fn test_resume_rejects_truncated_grid() {
    let mut session = GameSession::new(13, false);
    session.start();
    let mut saved = session.to_saved();
    saved.grid.truncate(10);
    assert!(GameSession::resume(&saved).is_none());
}

#[test]
fn test_hard_mode_session_places_only() {
    let mut session = GameSession::new(21, true);
    session.start();
    play_greedy(&mut session);

    // Hard mode never skips; the greedy player falls back to ending early.
    assert_eq!(session.skipped_count(), 0);
    assert_eq!(session.score().skipped, 0);
    assert!(!session.undo());
}

#[test]
fn test_completed_game_recorded_into_stats() {
    let mut session = GameSession::new(30, false);
    session.start();
    play_greedy(&mut session);

    let mut stats = Stats::default();
    stats.record_game(session.puzzle_number(), session.score().total);

    assert!(stats.has_completed(30));
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.current_streak, 1);

    // Next day's game extends the streak.
    let mut next = GameSession::new(31, false);
    next.start();
    play_greedy(&mut next);
    stats.record_game(next.puzzle_number(), next.score().total);
    assert_eq!(stats.current_streak, 2);
}
