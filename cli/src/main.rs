//! Cubik CLI - binary entry point and terminal session management.
//!
//! The binary bridges [`cubik_engine`] (game state) and [`cubik_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed
//! cleanup:
//!
//! ```text
//! main() -> TerminalSession::new() -> run() -> draw / poll loop
//! ```
//!
//! Each loop turn renders a frame, then waits up to the poll timeout for
//! input; the timeout is the only pacing, there is no background work.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, Stdout, stdout},
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cubik_engine::{App, CubikConfig};
use cubik_tui::{draw, poll_events};

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Where the session log goes: `logs/cubik.log` beside the config file,
/// or under `./.cubik` when no home directory exists.
fn log_path() -> PathBuf {
    CubikConfig::path()
        .and_then(|config| config.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(".cubik"))
        .join("logs")
        .join("cubik.log")
}

fn open_log_file() -> io::Result<(PathBuf, File)> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Sends tracing output to the log file. Stdout belongs to the board, so a
/// session without a usable log file runs quiet instead.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match open_log_file() {
        Ok((path, file)) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .init();
            tracing::info!(path = %path.display(), "logging to file");
        }
        Err(_) => {
            tracing_subscriber::registry().with(filter).init();
        }
    }
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are restored even after panics or
/// early returns, so the player's shell survives a crash.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = match CubikConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), %err, "ignoring unusable config");
            None
        }
    };

    let mut app = App::new(config.as_ref());
    app.scramble();

    let mut session = TerminalSession::new()?;
    run(&mut session.terminal, &mut app)
}

fn run<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if poll_events(app, POLL_TIMEOUT)? {
            return Ok(());
        }
    }
}
