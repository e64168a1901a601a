//! TUI rendering for Cubik using ratatui.
//!
//! The cube draws as an unfolded net: Top above the Left-Front-Right-Back
//! band, Bottom below. The digit gutters around the net show which key
//! twists which layer: `1 2 3` above the columns (X layers), `7`/`8`/`9`
//! beside the Top rows (Z layers), `6`/`5`/`4` beside the band rows
//! (Y layers).

mod input;
mod theme;

pub use input::{handle_key, poll_events};
pub use theme::{Palette, palette, sticker_span, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use cubik_engine::{App, Cube, Side, UiOptions};

/// Width of the rendered net in terminal columns: a two-column label
/// gutter plus four faces of three two-column stickers.
const NET_WIDTH: u16 = 2 + 4 * 6;
/// Height in rows: key-hint header plus three faces of three rows.
const NET_HEIGHT: u16 = 1 + 3 * 3;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = theme::palette(options);

    let bg = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Board
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_board(frame, app, chunks[0], &palette);
    draw_status_bar(frame, app, chunks[1], &palette);
}

fn draw_board(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    if area.width < NET_WIDTH || area.height < NET_HEIGHT {
        let notice = Paragraph::new(Line::styled(
            "Terminal too small for the cube",
            styles::status_muted(palette),
        ));
        frame.render_widget(notice, area);
        return;
    }

    let board = Rect {
        x: area.x + (area.width - NET_WIDTH) / 2,
        y: area.y + (area.height - NET_HEIGHT) / 2,
        width: NET_WIDTH,
        height: NET_HEIGHT,
    };
    let lines = net_lines(app.cube(), palette, app.ui_options());
    frame.render_widget(Paragraph::new(lines), board);
}

/// The ten lines of the unfolded net, key-hint gutters included.
fn net_lines(cube: &Cube, palette: &Palette, options: UiOptions) -> Vec<Line<'static>> {
    let hint = styles::key_hint(palette);
    let row_of = |side: Side, row: usize| -> [Span<'static>; 3] {
        let face = cube.face(side);
        [0, 1, 2].map(|col| theme::sticker_span(palette, options, face[row * 3 + col]))
    };

    let mut lines = Vec::with_capacity(NET_HEIGHT as usize);

    // X layers are the columns of Top, Front, and Bottom alike.
    lines.push(Line::from(Span::styled("        1 2 3", hint)));

    for row in 0..3 {
        let mut spans = vec![Span::styled(format!("      {} ", 7 + row), hint)];
        spans.extend(row_of(Side::Top, row));
        lines.push(Line::from(spans));
    }

    for row in 0..3 {
        let mut spans = vec![Span::styled(format!("{} ", 6 - row), hint)];
        for side in [Side::Left, Side::Front, Side::Right, Side::Back] {
            spans.extend(row_of(side, row));
        }
        lines.push(Line::from(spans));
    }

    for row in 0..3 {
        let mut spans = vec![Span::raw("        ")];
        spans.extend(row_of(Side::Bottom, row));
        lines.push(Line::from(spans));
    }

    lines
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let line = if app.is_solved() {
        Line::from(vec![
            Span::styled(
                format!(" Solved in {} moves!", app.moves()),
                styles::solved_banner(palette),
            ),
            Span::styled("  n new scramble · q quit", styles::status_muted(palette)),
        ])
    } else {
        let mut spans = vec![Span::styled(
            format!(" Moves: {}", app.moves()),
            styles::status(palette),
        )];
        if let Some(mv) = app.last_move() {
            spans.push(Span::styled(
                format!("  Last: {mv}"),
                styles::status(palette),
            ));
        }
        spans.push(Span::styled(
            "  1-9 twist · n scramble · q quit",
            styles::status_muted(palette),
        ));
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line), area);
}
