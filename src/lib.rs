//! Grid snake for the terminal.
//!
//! The core is pure game state:
//! - [`grid`]: cells, directions and wraparound motion
//! - [`food`]: food placement on free cells
//! - [`snake`]: the snake's body and its step/grow/reset transitions
//! - [`game`]: one board of rules per tick and the session state around it
//!
//! [`input`], [`clock`], [`render`] and [`terminal`] are the thin layer over
//! crossterm and ratatui.

pub mod clock;
pub mod consts;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod snake;
pub mod terminal;
