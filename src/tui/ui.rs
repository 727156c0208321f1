//! Stateless UI rendering for the grid board.

use gridtactoe::{Cell, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;

/// Terminal extent of one board cell, derived from the configured pixel
/// size. A terminal glyph is roughly 8×20 px, so the mapping keeps the
/// cells close to square on screen.
pub fn cell_extent(cell_size: u16) -> (u16, u16) {
    let width = (cell_size / 8).clamp(3, 13);
    let height = (cell_size / 20).clamp(1, 5);
    (width, height)
}

/// Splits the frame into title, board, and status areas.
pub fn layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Renders the whole frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let (title_area, board_area, status_area) = layout(frame.area());

    let title = Paragraph::new("Gridtactoe - three in a row wins")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    draw_board(frame, board_area, app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

/// Maps a terminal coordinate to the board cell under it.
///
/// Clicks on the grid lines between cells, or outside the grid, land in
/// no cell.
pub fn cell_at(frame_area: Rect, app: &App, x: u16, y: u16) -> Option<(usize, usize)> {
    let (_, board_area, _) = layout(frame_area);
    let n = app.size() as u16;
    let (cell_w, cell_h) = cell_extent(app.cell_size());
    let grid = grid_rect(board_area, n, cell_w, cell_h);

    if x < grid.x || y < grid.y {
        return None;
    }
    let dx = x - grid.x;
    let dy = y - grid.y;
    if dx % (cell_w + 1) == cell_w || dy % (cell_h + 1) == cell_h {
        return None;
    }
    let col = dx / (cell_w + 1);
    let row = dy / (cell_h + 1);
    (row < n && col < n).then_some((row as usize, col as usize))
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let n = app.size() as u16;
    let (cell_w, cell_h) = cell_extent(app.cell_size());
    let grid = grid_rect(area, n, cell_w, cell_h);

    for row in 0..n {
        for col in 0..n {
            let cell_area = Rect::new(
                grid.x.saturating_add(col.saturating_mul(cell_w + 1)),
                grid.y.saturating_add(row.saturating_mul(cell_h + 1)),
                cell_w,
                cell_h,
            )
            .intersection(area);
            draw_cell(frame, cell_area, app, row as usize, col as usize);
        }
    }

    draw_grid_lines(frame, area, grid, n, cell_w, cell_h);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, row: usize, col: usize) {
    let cell = app.state().board().get(row, col).unwrap_or(Cell::Empty);

    let (symbol, base_style) = match cell {
        Cell::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Mark::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if (row, col) == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Blank lines above the symbol center it vertically.
    let mut lines: Vec<Line> = (0..area.height.saturating_sub(1) / 2)
        .map(|_| Line::default())
        .collect();
    lines.push(Line::from(Span::raw(symbol)));

    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_grid_lines(frame: &mut Frame, area: Rect, grid: Rect, n: u16, cell_w: u16, cell_h: u16) {
    let line_style = Style::default().fg(Color::DarkGray);

    for row in 1..n {
        let y = grid.y.saturating_add(row.saturating_mul(cell_h + 1) - 1);
        let sep = Rect::new(grid.x, y, grid.width, 1).intersection(area);
        let paragraph = Paragraph::new("─".repeat(sep.width as usize)).style(line_style);
        frame.render_widget(paragraph, sep);
    }

    for col in 1..n {
        let x = grid.x.saturating_add(col.saturating_mul(cell_w + 1) - 1);
        let sep = Rect::new(x, grid.y, 1, grid.height).intersection(area);
        let bars: Vec<Line> = (0..sep.height).map(|_| Line::from("│")).collect();
        let paragraph = Paragraph::new(bars).style(line_style);
        frame.render_widget(paragraph, sep);
    }
}

fn grid_rect(area: Rect, n: u16, cell_w: u16, cell_h: u16) -> Rect {
    let width = n.saturating_mul(cell_w).saturating_add(n.saturating_sub(1));
    let height = n.saturating_mul(cell_h).saturating_add(n.saturating_sub(1));

    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width.min(area.width),
        height.min(area.height),
    )
}
