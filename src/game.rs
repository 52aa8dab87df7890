use crate::food::FoodSpawner;
use crate::grid::{Cell, Direction, GridSize};
use crate::input::Command;
use crate::snake::SnakeState;
use log::{debug, info};
use rand::Rng;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,                          // Plain step
    Ate,                            // Head reached the food, growth scheduled
    Reset { final_length: usize },  // Bit itself, back to a single segment
    Won,                            // Snake covers the board
}

/// The snake and its food on one board.
#[derive(Debug)]
pub struct Board<R = rand::rngs::ThreadRng> {
    snake: SnakeState,
    food: Option<Cell>,
    spawner: FoodSpawner<R>,
}

impl Board<rand::rngs::ThreadRng> {
    pub fn new(grid: GridSize) -> Self {
        Board::with_rng(grid, rand::thread_rng())
    }
}

impl<R: Rng> Board<R> {
    pub fn with_rng(grid: GridSize, rng: R) -> Self {
        let mut board = Board {
            snake: SnakeState::new(grid),
            food: None,
            spawner: FoodSpawner::with_rng(grid, rng),
        };
        board.relocate_food();
        board
    }

    /// Moves the snake one cell and applies the collision, win and food
    /// rules, in that order.
    pub fn tick(&mut self) -> TickOutcome {
        self.snake.advance();

        if self.snake.check_self_collision() {
            let final_length = self.snake.len();
            self.snake.reset();
            self.relocate_food();
            return TickOutcome::Reset { final_length };
        }

        if self.snake.has_won() {
            return TickOutcome::Won;
        }

        match self.food {
            Some(food) if self.snake.check_food_collision(food) => {
                self.snake.grow();
                self.relocate_food();
                TickOutcome::Ate
            }
            _ => TickOutcome::Moved,
        }
    }

    fn relocate_food(&mut self) {
        let occupied: HashSet<Cell> = self.snake.body().iter().copied().collect();
        self.food = self.spawner.place(&occupied);
    }
}

impl<R> Board<R> {
    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    pub fn snake(&self) -> &SnakeState {
        &self.snake
    }

    /// `None` only once the snake leaves no free cell.
    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn grid(&self) -> GridSize {
        self.snake.grid()
    }

    pub fn score(&self) -> usize {
        self.snake.len() - 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Paused,
    Won,
    Exit,
}

pub struct Game<R = rand::rngs::ThreadRng> {
    state: GameState,
    board: Board<R>,
    pending_direction: Option<Direction>,
}

impl Game<rand::rngs::ThreadRng> {
    pub fn new(grid: GridSize) -> Self {
        Game::with_board(Board::new(grid))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_board(board: Board<R>) -> Self {
        Game {
            state: GameState::Playing,
            board,
            pending_direction: None,
        }
    }

    /// Runs one tick while playing. The buffered turn is applied before the
    /// snake moves.
    pub fn update(&mut self) {
        if self.state != GameState::Playing {
            return;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.board.set_direction(direction);
        }

        match self.board.tick() {
            TickOutcome::Moved => {}
            TickOutcome::Ate => {
                debug!("Food eaten, score {}", self.board.score() + 1);
            }
            TickOutcome::Reset { final_length } => {
                info!("Snake hit itself at length {}, starting over", final_length);
            }
            TickOutcome::Won => {
                info!("Snake filled the board");
                self.state = GameState::Won;
            }
        }
    }
}

impl<R> Game<R> {
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board<R> {
        &self.board
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn handle_command(&mut self, command: Command) {
        let new_state = match (self.state, command) {
            (GameState::Won | GameState::Exit, _) => None,
            (_, Command::Quit) => Some(GameState::Exit),
            (GameState::Playing, Command::TogglePause) => Some(GameState::Paused),
            (GameState::Paused, Command::TogglePause) => Some(GameState::Playing),
            (GameState::Playing, Command::Turn(direction)) => {
                self.buffer_turn(direction);
                None
            }
            (GameState::Paused, Command::Turn(_)) => None,
        };

        if let Some(new_state) = new_state {
            info!("Game state {:?} -> {:?}", self.state, new_state);
            self.state = new_state;
        }
    }

    // First usable turn of a tick wins; a reversal does not use up the slot.
    fn buffer_turn(&mut self, direction: Direction) {
        let heading = self.board.snake().direction();
        if self.pending_direction.is_none() && direction != heading.opposite() {
            self.pending_direction = Some(direction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x5EED_5A4E;
    const GRID: GridSize = GridSize {
        width: 32,
        height: 24,
    };

    fn board(grid: GridSize) -> Board<ChaCha12Rng> {
        Board::with_rng(grid, ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn game() -> Game<ChaCha12Rng> {
        let mut board = board(GRID);
        // Keep the food out of the snake's way
        board.food = Some(Cell::new(0, 0));
        Game::with_board(board)
    }

    #[test]
    fn test_new_board() {
        let board = board(GRID);
        assert_eq!(board.snake().head(), Cell::new(16, 12));
        assert_eq!(board.snake().len(), 1);
        assert_eq!(board.score(), 0);

        let food = board.food().unwrap();
        assert!(GRID.contains(food));
        assert_ne!(food, board.snake().head());
    }

    #[test]
    fn test_tick_moves() {
        let mut board = board(GRID);
        board.food = Some(Cell::new(0, 0));
        assert_eq!(board.tick(), TickOutcome::Moved);
        assert_eq!(board.snake().head(), Cell::new(17, 12));
        assert_eq!(board.food(), Some(Cell::new(0, 0)));
    }

    #[test]
    fn test_eat_then_grow() {
        let mut board = board(GRID);
        board.food = Some(Cell::new(17, 12));

        assert_eq!(board.tick(), TickOutcome::Ate);
        assert_eq!(board.snake().head(), Cell::new(17, 12));
        assert_eq!(board.snake().len(), 1);
        assert!(board.snake().grow_pending());

        let food = board.food().unwrap();
        assert_ne!(food, Cell::new(17, 12));

        board.food = Some(Cell::new(0, 0));
        assert_eq!(board.tick(), TickOutcome::Moved);
        assert_eq!(board.snake().len(), 2);
        assert_eq!(board.snake().head(), Cell::new(18, 12));
        assert_eq!(board.score(), 1);
    }

    #[test]
    fn test_food_never_lands_on_snake() {
        let mut board = board(GRID);
        for _ in 0..500 {
            // Always aim for the food so the snake keeps growing
            let (head, food) = (board.snake().head(), board.food().unwrap());
            let direction = if head.col != food.col {
                Direction::Right
            } else {
                Direction::Down
            };
            board.set_direction(direction);
            if board.tick() == TickOutcome::Won {
                break;
            }
            if let Some(food) = board.food() {
                assert!(!board.snake().body().contains(&food));
            }
        }
    }

    #[test]
    fn test_self_collision_resets() {
        let mut board = board(GRID);
        board.snake = SnakeState::from_segments(
            GRID,
            [Cell::new(5, 5), Cell::new(5, 6), Cell::new(6, 6), Cell::new(6, 5)],
            Direction::Right,
        )
        .unwrap();
        board.snake.grow();
        board.food = Some(Cell::new(0, 0));

        assert_eq!(board.tick(), TickOutcome::Reset { final_length: 5 });
        assert_eq!(board.snake(), &SnakeState::new(GRID));
        let food = board.food().unwrap();
        assert_ne!(food, GRID.center());
    }

    #[test]
    fn test_win_on_tiny_board() {
        let grid = GridSize {
            width: 2,
            height: 1,
        };
        let mut board = board(grid);
        // Only the left cell is free at the start
        assert_eq!(board.food(), Some(Cell::new(0, 0)));

        assert_eq!(board.tick(), TickOutcome::Ate);
        assert_eq!(board.food(), Some(Cell::new(1, 0)));

        assert_eq!(board.tick(), TickOutcome::Won);
        assert_eq!(board.snake().len(), 2);
    }

    #[test]
    fn test_win_on_full_size_board() {
        // Zig-zag over every row from (0, 0) to (0, 23)
        let mut path: Vec<Cell> = Vec::with_capacity(GRID.area());
        for row in 0..GRID.height {
            if row % 2 == 0 {
                path.extend((0..GRID.width).map(|col| Cell::new(col, row)));
            } else {
                path.extend((0..GRID.width).rev().map(|col| Cell::new(col, row)));
            }
        }
        // Head at (0, 23), only (0, 0) left free, one wrapped step down
        let body: Vec<Cell> = path.iter().rev().take(GRID.area() - 1).copied().collect();
        assert_eq!(body[0], Cell::new(0, 23));

        let mut board = board(GRID);
        board.snake = SnakeState::from_segments(GRID, body, Direction::Down).unwrap();
        board.snake.grow();
        board.food = None;

        let mut game = Game::with_board(board);
        game.update();
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.board().snake().len(), 768);

        // Nothing moves after the win
        let head = game.board().snake().head();
        game.update();
        assert_eq!(game.board().snake().head(), head);
    }

    #[test]
    fn test_first_turn_per_tick_wins() {
        let mut game = game();
        game.handle_command(Command::Turn(Direction::Up));
        game.handle_command(Command::Turn(Direction::Left));
        assert_eq!(game.pending_direction(), Some(Direction::Up));

        game.update();
        assert_eq!(game.pending_direction(), None);
        assert_eq!(game.board().snake().direction(), Direction::Up);
        assert_eq!(game.board().snake().head(), Cell::new(16, 11));
    }

    #[test]
    fn test_reversal_does_not_block_turn() {
        let mut game = game();
        game.handle_command(Command::Turn(Direction::Left));
        assert_eq!(game.pending_direction(), None);
        game.handle_command(Command::Turn(Direction::Down));
        assert_eq!(game.pending_direction(), Some(Direction::Down));

        game.update();
        assert_eq!(game.board().snake().head(), Cell::new(16, 13));
    }

    #[test]
    fn test_pause() {
        let mut game = game();
        game.handle_command(Command::TogglePause);
        assert_eq!(game.state(), GameState::Paused);

        // Turns are not buffered and the snake stays put while paused
        game.handle_command(Command::Turn(Direction::Up));
        game.update();
        assert_eq!(game.pending_direction(), None);
        assert_eq!(game.board().snake().head(), Cell::new(16, 12));

        game.handle_command(Command::TogglePause);
        assert_eq!(game.state(), GameState::Playing);
        game.update();
        assert_eq!(game.board().snake().head(), Cell::new(17, 12));
    }

    #[test]
    fn test_quit() {
        let mut game = game();
        game.handle_command(Command::Quit);
        assert_eq!(game.state(), GameState::Exit);

        game.handle_command(Command::TogglePause);
        assert_eq!(game.state(), GameState::Exit);

        let mut game = game_paused();
        game.handle_command(Command::Quit);
        assert_eq!(game.state(), GameState::Exit);
    }

    fn game_paused() -> Game<ChaCha12Rng> {
        let mut game = game();
        game.handle_command(Command::TogglePause);
        game
    }
}
