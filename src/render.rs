use crate::consts::{APPLE_COLOR, BOARD_BACKGROUND_COLOR, BORDER_COLOR, CELL_SIZE, SNAKE_COLOR};
use crate::game::{Board, Game, GameState};
use crate::grid::{Cell, GridSize};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Widget},
};

/// Terminal columns and rows needed to show a whole board, border included.
pub fn required_size(grid: GridSize) -> (u16, u16) {
    (
        grid.width.saturating_mul(CELL_SIZE.width).saturating_add(2),
        grid.height.saturating_mul(CELL_SIZE.height).saturating_add(2),
    )
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board = self.board();
        let (width, height) = required_size(board.grid());
        let [area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        let title = match self.state() {
            GameState::Paused => format!(
                " Snake  Score: {}  Paused. Press SPACE to continue ",
                board.score()
            ),
            GameState::Won => " Game over, you won! ".to_string(),
            GameState::Playing | GameState::Exit => format!(" Snake  Score: {} ", board.score()),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_COLOR))
            .style(Style::default().bg(BOARD_BACKGROUND_COLOR));
        let inner_area = block.inner(area);

        Clear.render(area, buf);
        block.render(area, buf);
        board.render(inner_area, buf);
    }
}

impl<R> Widget for &Board<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for &segment in self.snake().body() {
            draw_cell(buf, area, segment, SNAKE_COLOR);
        }
        if let Some(food) = self.food() {
            draw_cell(buf, area, food, APPLE_COLOR);
        }
    }
}

/// Filled, bordered square at the cell's origin. Whatever falls outside
/// `area` is clipped.
fn draw_cell(buf: &mut Buffer, area: Rect, cell: Cell, color: Color) {
    let (x, y) = cell.origin(CELL_SIZE);
    for dy in 0..CELL_SIZE.height {
        for dx in 0..CELL_SIZE.width {
            let (Ok(col), Ok(row)) = (
                u16::try_from(x + dx as u32),
                u16::try_from(y + dy as u32),
            ) else {
                continue;
            };
            let pos = Position::new(area.x.saturating_add(col), area.y.saturating_add(row));
            if !area.contains(pos) || !buf.area.contains(pos) {
                continue;
            }

            let symbol = match dx {
                _ if CELL_SIZE.width == 1 => "■",
                0 => "[",
                dx if dx == CELL_SIZE.width - 1 => "]",
                _ => " ",
            };
            buf[(pos.x, pos.y)]
                .set_symbol(symbol)
                .set_fg(BORDER_COLOR)
                .set_bg(color);
        }
    }
}
