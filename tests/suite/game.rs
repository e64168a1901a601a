//! End-to-end key handling: crossterm events through the engine.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use cubik_engine::App;
use cubik_tui::handle_key;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn quit_keys_request_quit() {
    let mut app = App::default();
    assert!(handle_key(&mut app, press(KeyCode::Char('q'))));
    assert!(handle_key(&mut app, press(KeyCode::Esc)));
    assert!(handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
    ));
}

#[test]
fn digit_key_twists_a_layer() {
    let mut app = App::default();
    app.scramble();

    let quit = handle_key(&mut app, press(KeyCode::Char('1')));
    assert!(!quit);
    assert_eq!(app.moves(), 1);
}

#[test]
fn four_presses_of_one_key_restore_the_board() {
    let mut app = App::default();
    app.scramble();
    let before = app.cube().clone();

    for _ in 0..4 {
        handle_key(&mut app, press(KeyCode::Char('5')));
    }

    assert_eq!(app.cube(), &before);
    assert_eq!(app.moves(), 4);
}

#[test]
fn n_key_scrambles_a_fresh_board() {
    let mut app = App::default();
    assert!(app.is_solved());

    let quit = handle_key(&mut app, press(KeyCode::Char('n')));
    assert!(!quit);
    assert!(!app.is_solved(), "a scramble must leave the board mixed");
    assert_eq!(app.moves(), 0);
}

#[test]
fn unrelated_keys_change_nothing() {
    let mut app = App::default();
    app.scramble();
    let before = app.cube().clone();

    assert!(!handle_key(&mut app, press(KeyCode::Char('z'))));
    assert!(!handle_key(&mut app, press(KeyCode::Tab)));
    assert_eq!(app.cube(), &before);
    assert_eq!(app.moves(), 0);
}

#[test]
fn key_releases_are_ignored() {
    let mut app = App::default();
    app.scramble();

    let release = KeyEvent::new_with_kind(
        KeyCode::Char('1'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    );
    assert!(!handle_key(&mut app, release));
    assert_eq!(app.moves(), 0);
}
