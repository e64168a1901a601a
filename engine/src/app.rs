//! Application state for one game session.

use std::fmt;

use cubik_core::{Axis, Cube};

use crate::config::CubikConfig;
use crate::scramble::scramble;

/// Twists applied when scrambling, unless configured otherwise.
pub const DEFAULT_SCRAMBLE_TWISTS: u32 = 100;

/// Rendering options resolved from configuration, read by the TUI layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Render stickers as color initials instead of colored blanks.
    pub ascii_only: bool,
    /// Restrict the palette to the 16 ANSI colors.
    pub high_contrast: bool,
}

/// A single layer twist command, as issued by the keyboard driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub axis: Axis,
    pub layer: usize,
}

impl Move {
    /// Maps the digit keys to the nine twistable layers: `1`-`3` are the X
    /// layers 0-2, `4`-`6` the Y layers, `7`-`9` the Z layers.
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Move> {
        let n = digit.to_digit(10)? as usize;
        if !(1..=9).contains(&n) {
            return None;
        }
        Some(Move {
            axis: Axis::ALL[(n - 1) / 3],
            layer: (n - 1) % 3,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.axis, self.layer)
    }
}

/// Runtime state for one game session.
///
/// Owns the cube exclusively; the TUI reads faces through [`App::cube`] and
/// feeds parsed input back through [`App::twist`] and [`App::scramble`].
#[derive(Debug)]
pub struct App {
    cube: Cube,
    moves: u32,
    last_move: Option<Move>,
    scramble_twists: u32,
    options: UiOptions,
}

impl App {
    /// A fresh session: solved cube, counters zeroed, options resolved from
    /// configuration.
    #[must_use]
    pub fn new(config: Option<&CubikConfig>) -> Self {
        let app_config = config.and_then(|cfg| cfg.app.as_ref());
        let options = UiOptions {
            ascii_only: app_config.is_some_and(|app| app.ascii_only),
            high_contrast: app_config.is_some_and(|app| app.high_contrast),
        };
        let scramble_twists = app_config
            .and_then(|app| app.scramble_moves)
            .unwrap_or(DEFAULT_SCRAMBLE_TWISTS);

        Self {
            cube: Cube::solved(),
            moves: 0,
            last_move: None,
            scramble_twists,
            options,
        }
    }

    /// Rescrambles the cube and starts counting from zero.
    pub fn scramble(&mut self) {
        let mut rng = rand::rng();
        scramble(&mut self.cube, self.scramble_twists, &mut rng);
        self.moves = 0;
        self.last_move = None;
        tracing::info!(twists = self.scramble_twists, "scrambled cube");
    }

    /// Applies one quarter turn and counts it.
    ///
    /// Once the cube is solved the session is over: further twists are
    /// ignored until the next scramble.
    pub fn twist(&mut self, mv: Move) {
        if self.cube.is_solved() {
            tracing::debug!(%mv, "ignoring twist on a solved cube");
            return;
        }
        match self.cube.rotate(mv.axis, mv.layer) {
            Ok(()) => {
                self.moves += 1;
                self.last_move = Some(mv);
                tracing::debug!(%mv, moves = self.moves, "twisted layer");
                if self.cube.is_solved() {
                    tracing::info!(moves = self.moves, "cube solved");
                }
            }
            Err(err) => {
                // Unreachable through the digit keymap; reachable for
                // hand-built moves.
                tracing::warn!(%err, "rejected twist");
            }
        }
    }

    #[must_use]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

}

impl Default for App {
    fn default() -> Self {
        Self::new(None)
    }
}
