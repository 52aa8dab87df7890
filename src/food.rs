use crate::consts::MAX_PLACEMENT_ATTEMPTS;
use crate::grid::{Cell, GridSize};
use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::HashSet;

/// Picks free cells for the food.
#[derive(Debug)]
pub struct FoodSpawner<R = rand::rngs::ThreadRng> {
    grid: GridSize,
    rng: R,
}

impl FoodSpawner<rand::rngs::ThreadRng> {
    pub fn new(grid: GridSize) -> Self {
        FoodSpawner::with_rng(grid, rand::thread_rng())
    }
}

impl<R: Rng> FoodSpawner<R> {
    pub fn with_rng(grid: GridSize, rng: R) -> Self {
        FoodSpawner { grid, rng }
    }

    /// Returns a cell that is not in `occupied`, or `None` if the board is
    /// full.
    ///
    /// Uniform sampling is tried first; once it has missed
    /// `MAX_PLACEMENT_ATTEMPTS` times the free cells are scanned and one of
    /// them is picked, so a nearly full board still terminates.
    pub fn place(&mut self, occupied: &HashSet<Cell>) -> Option<Cell> {
        if occupied.len() < self.grid.area() {
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                let cell = Cell {
                    col: self.rng.gen_range(0..self.grid.width),
                    row: self.rng.gen_range(0..self.grid.height),
                };
                if !occupied.contains(&cell) {
                    return Some(cell);
                }
            }
            debug!("Random food placement missed, scanning free cells");
        }

        self.grid
            .cells()
            .filter(|cell| !occupied.contains(cell))
            .choose(&mut self.rng)
    }
}
