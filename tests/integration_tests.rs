//! Integration tests for the game lifecycle, driven only through actions and ticks

use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_blocks::core::{spawn_x, DropOutcome, GameState};
use tui_blocks::types::{GameAction, BOARD_WIDTH, GRAVITY_MS};

/// Soft-drop until the game ends, returning how many pieces locked.
fn drop_until_game_over(state: &mut GameState) -> usize {
    let mut locked = 0;
    for _ in 0..5_000 {
        match state.step_down() {
            DropOutcome::Locked { .. } => locked += 1,
            DropOutcome::Moved => {}
            DropOutcome::Ignored => break,
        }
    }
    assert!(state.game_over(), "game should end when pieces stack up");
    locked
}

#[test]
fn test_new_game_starts_running() {
    let state = GameState::new(12345);

    let active = state.active().expect("a piece is active after construction");
    assert_eq!(active.y, 0);
    assert_eq!(active.x, spawn_x(&active.shape));
    assert_eq!(state.score(), 0);
    assert!(!state.paused());
    assert!(!state.game_over());
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = GameState::new(42);
    let mut b = GameState::with_rng(StdRng::seed_from_u64(42));

    for _ in 0..50 {
        assert_eq!(a.active(), b.active());
        assert_eq!(a.next(), b.next());
        a.step_down();
        b.step_down();
    }
}

#[test]
fn test_move_left_stops_at_wall() {
    let mut state = GameState::new(7);

    for _ in 0..BOARD_WIDTH {
        state.apply_action(GameAction::MoveLeft);
    }
    assert_eq!(state.active().map(|p| p.x), Some(0));
    assert!(!state.apply_action(GameAction::MoveLeft));
}

#[test]
fn test_move_right_stops_at_wall() {
    let mut state = GameState::new(7);

    for _ in 0..BOARD_WIDTH {
        state.apply_action(GameAction::MoveRight);
    }
    let active = state.active().expect("active piece");
    assert_eq!(active.x, active.max_x());
    assert_eq!(active.x + active.shape.width() as i8, BOARD_WIDTH as i8);
}

#[test]
fn test_gravity_moves_piece_once_per_period() {
    let mut state = GameState::new(3);
    let y0 = state.active().map(|p| p.y);

    assert!(!state.tick(GRAVITY_MS - 1));
    assert_eq!(state.active().map(|p| p.y), y0);

    assert!(state.tick(1));
    assert_eq!(state.active().map(|p| p.y), y0.map(|y| y + 1));
}

#[test]
fn test_pause_freezes_everything_but_unpause() {
    let mut state = GameState::new(99);
    state.apply_action(GameAction::Pause);
    assert!(state.paused());

    let before = state.active();
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.apply_action(GameAction::MoveRight));
    assert!(!state.apply_action(GameAction::RotateCw));
    assert!(!state.apply_action(GameAction::SoftDrop));
    assert!(!state.tick(GRAVITY_MS * 3));
    assert_eq!(state.active(), before);

    state.apply_action(GameAction::Pause);
    assert!(!state.paused());
    assert!(state.apply_action(GameAction::SoftDrop));
}

#[test]
fn test_restart_ignored_while_playing() {
    let mut state = GameState::new(5);
    state.step_down();
    let before = state.active();

    assert!(!state.apply_action(GameAction::Restart));
    assert_eq!(state.active(), before);
}

#[test]
fn test_full_lifecycle_game_over_and_restart() {
    let mut state = GameState::new(2024);

    let locked = drop_until_game_over(&mut state);
    assert!(locked > 0);
    assert!(state.active().is_none());

    // Nothing moves once the game is over.
    assert!(!state.apply_action(GameAction::SoftDrop));
    assert!(!state.tick(GRAVITY_MS));

    // Pause still toggles after game over.
    state.apply_action(GameAction::Pause);
    assert!(state.paused());
    state.apply_action(GameAction::Pause);

    assert!(state.apply_action(GameAction::Restart));
    assert!(!state.game_over());
    assert_eq!(state.score(), 0);
    assert!(state.active().is_some());
    assert!(state.board().cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_snapshot_reflects_state() {
    let mut state = GameState::new(11);
    state.apply_action(GameAction::Pause);

    let snap = state.snapshot();
    assert!(snap.paused);
    assert!(!snap.game_over);
    assert!(!snap.playable());
    assert_eq!(snap.score, state.score());
    assert_eq!(snap.next, state.next());
    assert_eq!(snap.active.map(|a| (a.x, a.y)), state.active().map(|a| (a.x, a.y)));
}
