//! Grid coordinates, directions and toroidal motion.

/// Dimensions of the board in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns `None` for a board without any cells.
    pub fn new(width: u16, height: u16) -> Option<Self> {
        (width > 0 && height > 0).then_some(GridSize { width, height })
    }

    pub fn center(&self) -> Cell {
        Cell {
            col: self.width / 2,
            row: self.height / 2,
        }
    }

    /// Number of cells on the board.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.width && cell.row < self.height
    }

    /// Every cell of the board in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Cell { col, row }))
    }
}

/// Size of a single cell on the output surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The one direction the snake may never turn to from `self`.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: u16,
    pub row: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellDelta {
    pub dx: i32,
    pub dy: i32,
}

impl From<Direction> for CellDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => CellDelta { dx: 0, dy: -1 },
            Direction::Down => CellDelta { dx: 0, dy: 1 },
            Direction::Left => CellDelta { dx: -1, dy: 0 },
            Direction::Right => CellDelta { dx: 1, dy: 0 },
        }
    }
}

impl Cell {
    pub const fn new(col: u16, row: u16) -> Self {
        Cell { col, row }
    }

    pub fn wrapped_add(&self, delta: CellDelta, grid: GridSize) -> Cell {
        let col = (self.col as i32 + delta.dx).rem_euclid(grid.width as i32) as u16;
        let row = (self.row as i32 + delta.dy).rem_euclid(grid.height as i32) as u16;
        Cell { col, row }
    }

    /// Top-left corner of this cell on the output surface.
    pub fn origin(&self, size: CellSize) -> (u32, u32) {
        (
            self.col as u32 * size.width as u32,
            self.row as u32 * size.height as u32,
        )
    }
}

/// Moves one cell in `direction`, re-entering on the opposite edge when
/// leaving the board.
pub fn step(cell: Cell, direction: Direction, grid: GridSize) -> Cell {
    cell.wrapped_add(direction.into(), grid)
}
