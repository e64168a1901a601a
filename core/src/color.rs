//! Sticker colors.

use std::fmt;

/// A sticker color: the six face colors plus `Hidden` for sticker slots
/// that currently face the cube's interior.
///
/// `Hidden` never shows up in a [`crate::Cube::face`] read - faces only ever
/// expose boundary stickers, and those are painted at construction and only
/// relocated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Red,
    Yellow,
    Green,
    Blue,
    Orange,
    Hidden,
}

impl Color {
    /// The six real face colors. Which face gets which color is decided by
    /// [`crate::Cube::solved`]; this is just the palette.
    pub const SOLID: [Color; 6] = [
        Color::White,
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Orange,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Hidden => "hidden",
        }
    }

    /// Single-letter form used by ASCII-only rendering.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Color::White => 'W',
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Hidden => '.',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
