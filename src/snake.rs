use crate::grid::{self, Cell, Direction, GridSize};
use std::collections::VecDeque;

/// The snake: body segments head-first, heading and growth flag.
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeState {
    grid: GridSize,
    body: VecDeque<Cell>,
    direction: Direction,
    grow_pending: bool,
}

impl SnakeState {
    /// A single segment in the middle of the board, heading right.
    pub fn new(grid: GridSize) -> Self {
        SnakeState {
            grid,
            body: VecDeque::from([grid.center()]),
            direction: Direction::Right,
            grow_pending: false,
        }
    }

    /// Builds a snake from explicit segments, head first. Returns `None`
    /// without any segment or with a segment off the board.
    pub fn from_segments(
        grid: GridSize,
        segments: impl IntoIterator<Item = Cell>,
        direction: Direction,
    ) -> Option<Self> {
        let body: VecDeque<Cell> = segments.into_iter().collect();
        if body.is_empty() || !body.iter().all(|&cell| grid.contains(cell)) {
            return None;
        }
        Some(SnakeState {
            grid,
            body,
            direction,
            grow_pending: false,
        })
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Segments from head to tail.
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false, a snake keeps at least its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grow_pending(&self) -> bool {
        self.grow_pending
    }

    /// Turning straight back is ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.direction = direction;
        }
    }

    pub fn advance(&mut self) {
        let new_head = grid::step(self.head(), self.direction, self.grid);
        self.body.push_front(new_head);

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop_back();
        }
    }

    /// Keep the tail on the next `advance`.
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    pub fn check_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }

    pub fn check_food_collision(&self, food: Cell) -> bool {
        self.head() == food
    }

    pub fn reset(&mut self) {
        *self = SnakeState::new(self.grid);
    }

    /// The body covers every cell of the board.
    pub fn has_won(&self) -> bool {
        self.len() >= self.grid.area()
    }
}
