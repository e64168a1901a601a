//! Color theme for the Cubik TUI.
//!
//! The standard palette uses RGB sticker colors close to the real puzzle's;
//! the high-contrast override sticks to the 16 ANSI colors, where orange has
//! no slot and falls back to magenta.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use cubik_engine::UiOptions;

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub text: Color,
    pub text_muted: Color,
    pub success: Color,
    pub sticker_white: Color,
    pub sticker_red: Color,
    pub sticker_yellow: Color,
    pub sticker_green: Color,
    pub sticker_blue: Color,
    pub sticker_orange: Color,
    pub sticker_hidden: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg: Color::Rgb(22, 22, 29),
            text: Color::Rgb(220, 215, 186),
            text_muted: Color::Rgb(114, 113, 105),
            success: Color::Rgb(152, 187, 108),
            sticker_white: Color::Rgb(255, 255, 255),
            sticker_red: Color::Rgb(183, 18, 52),
            sticker_yellow: Color::Rgb(255, 213, 0),
            sticker_green: Color::Rgb(0, 155, 72),
            sticker_blue: Color::Rgb(0, 70, 173),
            sticker_orange: Color::Rgb(255, 88, 0),
            sticker_hidden: Color::Rgb(42, 42, 55),
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            text: Color::White,
            text_muted: Color::Gray,
            success: Color::Green,
            sticker_white: Color::White,
            sticker_red: Color::Red,
            sticker_yellow: Color::Yellow,
            sticker_green: Color::Green,
            sticker_blue: Color::Blue,
            // The ANSI table has no orange.
            sticker_orange: Color::Magenta,
            sticker_hidden: Color::DarkGray,
        }
    }

    /// The terminal color for one sticker.
    #[must_use]
    pub fn sticker(&self, color: cubik_engine::Color) -> Color {
        match color {
            cubik_engine::Color::White => self.sticker_white,
            cubik_engine::Color::Red => self.sticker_red,
            cubik_engine::Color::Yellow => self.sticker_yellow,
            cubik_engine::Color::Green => self.sticker_green,
            cubik_engine::Color::Blue => self.sticker_blue,
            cubik_engine::Color::Orange => self.sticker_orange,
            cubik_engine::Color::Hidden => self.sticker_hidden,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// One rendered sticker, two columns wide.
///
/// Color terminals get a colored blank; ASCII mode doubles the color's
/// initial letter so the board survives terminals without background colors.
#[must_use]
pub fn sticker_span(
    palette: &Palette,
    options: UiOptions,
    color: cubik_engine::Color,
) -> Span<'static> {
    let terminal_color = palette.sticker(color);
    if options.ascii_only {
        let initial = color.initial();
        Span::styled(
            format!("{initial}{initial}"),
            Style::default().fg(terminal_color),
        )
    } else {
        Span::styled("  ", Style::default().bg(terminal_color))
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn status(palette: &Palette) -> Style {
        Style::default().fg(palette.text)
    }

    #[must_use]
    pub fn status_muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn solved_banner(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.success)
            .add_modifier(Modifier::BOLD)
    }
}
