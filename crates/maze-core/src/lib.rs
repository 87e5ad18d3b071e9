//! **maze-core**: grid and geometry types for the maze analysis engine.
//!
//! This crate provides the data the solver works on: integer coordinates
//! ([`Point`], [`Range`]), a dense owned [`Grid`], and the [`Tile`]
//! classification of raw maze values.

pub mod geom;
pub mod grid;
pub mod tile;

pub use geom::{Point, Range};
pub use grid::{Grid, GridError};
pub use tile::{FLOOR, GOAL, SOLID_WALL, Tile, WALL};

/// A maze as supplied by the authoring side: one raw `i8` per cell.
pub type Maze = Grid<i8>;
