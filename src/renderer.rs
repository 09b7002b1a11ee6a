use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::Grid;
use crate::game::GameState;
use crate::snake::Position;

const GLYPH_SNAKE: &str = "█";
const GLYPH_FOOD: &str = "●";

/// Renders one full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let [hud_area, board_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    render_hud(frame, hud_area, state.score, state.high_score());

    let block = Block::bordered().border_style(Style::new().fg(Color::DarkGray));
    let board = board_rect(board_area, state.grid());
    let inner = block.inner(board);
    frame.render_widget(block, board);

    let buffer = frame.buffer_mut();
    if let Some((x, y)) = logical_to_terminal(inner, state.grid(), state.food.position) {
        buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(Color::Green));
    }

    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.grid(), *segment) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_SNAKE, Style::new().fg(Color::White));
    }
}

/// Renders the title screen shown before the first game.
pub fn render_title(frame: &mut Frame<'_>, high_score: u32) {
    let area = frame.area();
    let [_, title_row, body_row, _] = Layout::vertical([
        Constraint::Percentage(35),
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let body = vec![
        Line::from(format!("High score: {high_score}")),
        Line::from(""),
        Line::from("Press any key to start the game..."),
        Line::from("[Q]/[Esc] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        body_row,
    );
}

fn render_hud(frame: &mut Frame<'_>, area: Rect, score: u32, high_score: u32) {
    frame.render_widget(
        Paragraph::new(Line::from(format!(
            "Score: {score}   High score: {high_score}"
        )))
        .alignment(Alignment::Left)
        .style(Style::default().fg(Color::White)),
        area,
    );
}

/// Returns the bordered board rectangle, clamped to the available area.
fn board_rect(area: Rect, grid: Grid) -> Rect {
    let width = grid.columns().saturating_add(2).min(area.width);
    let height = grid.rows().saturating_add(2).min(area.height);

    Rect {
        x: area.x,
        y: area.y,
        width,
        height,
    }
}

/// Maps a logical cell to a terminal cell, skipping anything that falls
/// outside the grid or the visible board.
fn logical_to_terminal(inner: Rect, grid: Grid, position: Position) -> Option<(u16, u16)> {
    if position.x < 0
        || position.y < 0
        || position.x >= i32::from(grid.columns())
        || position.y >= i32::from(grid.rows())
    {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
