//! Game engine for Cubik - session state and orchestration.
//!
//! This crate contains the [`App`] state machine without TUI dependencies:
//! the cube, the move counter, the digit keymap, the scrambler, and
//! configuration loading. The TUI layer reads state from `App` and forwards
//! input back to it; no rendering logic lives here.

mod app;
mod config;
mod scramble;

pub use app::{App, DEFAULT_SCRAMBLE_TWISTS, Move, UiOptions};
pub use config::{AppConfig, ConfigError, CubikConfig};
pub use scramble::scramble;

// Re-export the domain surface so downstream crates depend on one API.
pub use cubik_core::{Axis, Color, Cube, Side, TwistError};

#[cfg(test)]
mod tests;
