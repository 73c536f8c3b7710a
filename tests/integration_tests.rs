//! Integration tests for the game loop wiring: input mapping, engine, events and audio

use crossterm::event::{KeyCode, KeyEvent};

use tui_bricks::audio::{dispatch, tones_for, Recorder};
use tui_bricks::core::{GameState, PieceRng};
use tui_bricks::input::handle_key_event;
use tui_bricks::term::{GameView, Viewport};
use tui_bricks::types::{GameAction, GameEvent, PieceKind};

fn press(state: &mut GameState, code: KeyCode) -> bool {
    match handle_key_event(KeyEvent::from(code)) {
        Some(action) => state.apply_action(action),
        None => false,
    }
}

#[test]
fn test_keys_drive_the_engine() {
    let mut state = GameState::with_rng(PieceRng::scripted(&[PieceKind::T, PieceKind::O]));
    state.start();
    let x0 = state.active().unwrap().x;

    assert!(press(&mut state, KeyCode::Left));
    assert_eq!(state.active().unwrap().x, x0 - 1);
    assert!(press(&mut state, KeyCode::Char('d')));
    assert_eq!(state.active().unwrap().x, x0);
    assert!(press(&mut state, KeyCode::Up));
    assert!(press(&mut state, KeyCode::Down));
    assert_eq!(state.active().unwrap().y, 0);

    assert!(press(&mut state, KeyCode::Char(' ')));
    assert_eq!(state.active().unwrap().kind, PieceKind::O);
    assert_eq!(state.board().filled_count(), 4);

    // Restart is ignored mid-game.
    assert!(!press(&mut state, KeyCode::Enter));
}

#[test]
fn test_events_reach_feedback_sink_in_order() {
    let mut state = GameState::with_rng(PieceRng::scripted(&[PieceKind::O]));
    state.start();
    state.apply_action(GameAction::MoveRight);
    state.apply_action(GameAction::SoftDrop);
    state.apply_action(GameAction::HardDrop);

    let mut sink = Recorder::default();
    dispatch(&mut sink, state.take_events());

    assert_eq!(
        sink.events,
        vec![
            GameEvent::Started,
            GameEvent::Moved,
            GameEvent::SoftDropStep,
            GameEvent::Locked,
        ]
    );
    assert!(sink.events.iter().all(|e| !tones_for(*e).is_empty()));
}

#[test]
fn test_full_game_until_game_over_and_restart() {
    // Hard-dropping O pieces in the center stacks them to the top.
    let mut state = GameState::with_rng(PieceRng::scripted(&[PieceKind::O]));
    state.start();

    let mut drops = 0;
    while state.running() {
        state.apply_action(GameAction::HardDrop);
        drops += 1;
        assert!(drops <= 10, "stack should top out within ten drops");
    }
    assert_eq!(drops, 10);
    assert_eq!(state.score(), 0);

    let events = state.take_events();
    // The final lock reports game over first, then the lock itself.
    assert_eq!(
        &events[events.len() - 2..],
        &[GameEvent::GameOver, GameEvent::Locked]
    );
    assert_eq!(
        events.iter().filter(|e| **e == GameEvent::Locked).count(),
        10
    );

    let snap = state.snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(60, 24));
    let text: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text.contains("GAME OVER"));

    assert!(state.apply_action(GameAction::Restart));
    assert!(state.running());
    assert_eq!(state.board().filled_count(), 0);
    assert_eq!(state.take_events().as_slice(), &[GameEvent::Started]);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let play = |seed: u64| {
        let mut state = GameState::new(seed);
        state.start();
        for i in 0..200 {
            let action = match i % 4 {
                0 => GameAction::MoveLeft,
                1 => GameAction::Rotate,
                2 => GameAction::MoveRight,
                _ => GameAction::HardDrop,
            };
            state.apply_action(action);
            if state.is_game_over() {
                state.restart();
            }
        }
        state.snapshot()
    };

    assert_eq!(play(99), play(99));
}
