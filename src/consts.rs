//! Hard-coded configuration for the game
use crate::grid::{CellSize, GridSize};
use ratatui::style::Color;

/// Board of 32×24 cells, i.e. a 640×480 field of 20px cells
pub const GRID_SIZE: GridSize = GridSize {
    width: 32,
    height: 24,
};

/// Size of one board cell on screen. Terminal glyphs are roughly twice as
/// tall as they are wide, so two columns make a square.
pub const CELL_SIZE: CellSize = CellSize {
    width: 2,
    height: 1,
};

/// Snake moves per second
pub const TICKS_PER_SECOND: u32 = 12;

/// Random samples tried before falling back to scanning the free cells
pub const MAX_PLACEMENT_ATTEMPTS: usize = 64;

pub const LOG_FILE: &str = "snake.log";

/// Process status when the snake fills the whole board
pub const WON_EXIT_CODE: u8 = 3;

pub const BOARD_BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 0);
pub const BORDER_COLOR: Color = Color::Rgb(93, 216, 228);
pub const APPLE_COLOR: Color = Color::Rgb(255, 0, 0);
pub const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);
