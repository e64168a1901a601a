//! Input handling for the Cubik TUI.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use cubik_engine::{App, Move};

/// Waits up to `timeout` for terminal input, then drains everything queued.
///
/// Returns `true` when the player asked to quit. The timeout doubles as the
/// frame cadence: when no input arrives the caller just redraws.
pub fn poll_events(app: &mut App, timeout: Duration) -> Result<bool> {
    if !event::poll(timeout)? {
        return Ok(false);
    }
    loop {
        if let Event::Key(key) = event::read()?
            && handle_key(app, key)
        {
            return Ok(true);
        }
        if !event::poll(Duration::ZERO)? {
            return Ok(false);
        }
    }
}

/// Applies one key event to the app. Returns `true` on a quit request.
///
/// Only key presses count; repeats and releases are ignored so a held key
/// does not spin layers on terminals that report them.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Char('n') => {
            app.scramble();
            false
        }
        KeyCode::Char(digit @ '1'..='9') => {
            if let Some(mv) = Move::from_digit(digit) {
                app.twist(mv);
            }
            false
        }
        other => {
            debug!(?other, "ignoring key");
            false
        }
    }
}
