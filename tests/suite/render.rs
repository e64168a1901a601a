//! Full-pipeline rendering tests: engine state through `draw` onto a
//! virtual terminal.

use ratatui::Terminal;

use cubik_engine::{App, AppConfig, CubikConfig};
use cubik_tui::draw;

use crate::vt100_backend::VT100Backend;

fn ascii_app() -> App {
    let config = CubikConfig {
        app: Some(AppConfig {
            ascii_only: true,
            ..AppConfig::default()
        }),
    };
    App::new(Some(&config))
}

fn render(app: &App, width: u16, height: u16) -> String {
    let backend = VT100Backend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("virtual terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw frame");
    terminal.backend().contents()
}

#[test]
fn solved_board_renders_every_face() {
    let screen = render(&ascii_app(), 40, 14);

    assert!(screen.contains("1 2 3"), "missing key hints:\n{screen}");
    assert!(screen.contains("WWWWWW"), "missing top face:\n{screen}");
    assert!(
        screen.contains("GGGGGGRRRRRRBBBBBBOOOOOO"),
        "missing middle band:\n{screen}"
    );
    assert!(screen.contains("YYYYYY"), "missing bottom face:\n{screen}");
    assert!(
        screen.contains("Solved in 0 moves!"),
        "missing solved banner:\n{screen}"
    );
}

#[test]
fn scrambled_board_shows_the_move_counter() {
    let mut app = ascii_app();
    app.scramble();
    let screen = render(&app, 40, 14);

    assert!(screen.contains("Moves: 0"), "missing move counter:\n{screen}");
    assert!(
        !screen.contains("Solved in"),
        "scrambled board must not show the solved banner:\n{screen}"
    );
}

#[test]
fn tiny_terminal_shows_a_notice_instead_of_the_board() {
    let screen = render(&ascii_app(), 20, 4);
    assert!(
        screen.contains("Terminal too small"),
        "missing too-small notice:\n{screen}"
    );
}
