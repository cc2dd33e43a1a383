//! Board rendering.

use crate::app::App;
use gridline_core::{Board, Cell, Outcome, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draws the full frame: field, status line, and end-of-game banner.
pub fn draw(f: &mut Frame, app: &App) {
    let (board_area, status_area) = split(f.area());

    let status = Paragraph::new(app.status()).style(Style::default().fg(Color::Gray));
    f.render_widget(status, status_area);

    let Some(board) = app.engine().board() else {
        return;
    };
    render_board(f, board_area, board, app.cursor());

    if let Some(outcome) = app.engine().outcome()
        && outcome.is_over()
    {
        render_banner(f, board_area, outcome);
    }
}

/// Splits the frame into the field area and a one-line status bar.
pub fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Size of one cell in terminal columns and rows.
pub fn cell_size(area: Rect, board_width: i32, board_height: i32) -> (u16, u16) {
    let cw = (area.width / board_width as u16).max(1);
    let ch = (area.height / board_height as u16).max(1);
    (cw, ch)
}

/// Maps a terminal position to a cell coordinate: the inverse of the
/// cell layout used for rendering.
pub fn cell_at(
    area: Rect,
    board_width: i32,
    board_height: i32,
    column: u16,
    row: u16,
) -> Option<(i32, i32)> {
    if column < area.x || row < area.y {
        return None;
    }
    let (cw, ch) = cell_size(area, board_width, board_height);
    let x = ((column - area.x) / cw) as i32;
    let y = ((row - area.y) / ch) as i32;
    (x < board_width && y < board_height).then_some((x, y))
}

fn render_board(f: &mut Frame, area: Rect, board: &Board, cursor: (i32, i32)) {
    let (cw, ch) = cell_size(area, board.width(), board.height());
    for y in 0..board.height() {
        for x in 0..board.width() {
            let rect = Rect::new(area.x + x as u16 * cw, area.y + y as u16 * ch, cw, ch)
                .intersection(area);
            if rect.is_empty() {
                continue;
            }
            render_cell(f, rect, board.get(x, y), cursor == (x, y));
        }
    }
}

fn render_cell(f: &mut Frame, rect: Rect, cell: Cell, selected: bool) {
    let (text, style) = match cell {
        Cell::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Player::Human) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::Computer) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(paragraph, rect);
}

fn render_banner(f: &mut Frame, area: Rect, outcome: Outcome) {
    let message = match outcome {
        Outcome::Won(Player::Human) => "You win",
        Outcome::Won(Player::Computer) => "The computer wins",
        Outcome::Draw => "Draw",
        Outcome::InProgress => return,
    };
    let banner = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(3) / 2,
        area.width,
        3.min(area.height),
    );
    let paragraph = Paragraph::new(format!("\n{message}"))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(Clear, banner);
    f.render_widget(paragraph, banner);
}
