use std::fmt;

use maze_core::{Point, Range};

/// Errors reported by the analyzer, the path reconstructor and the line
/// encoder. All of them are precondition violations detected synchronously;
/// nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A coordinate lies outside the grid.
    OutOfBounds { pos: Point, bounds: Range },
    /// A path was requested from a wall cell.
    Wall(Point),
    /// A path was requested from a cell with no route to any goal.
    Unreachable(Point),
    /// Two consecutive cells of a line are not orthogonally adjacent.
    NonAdjacent { from: Point, to: Point },
    /// The maze has no cells.
    InvalidShape { width: i32, height: i32 },
    /// Following the direction labels did not move strictly closer to a
    /// goal. The analysis was corrupted after it was computed.
    Inconsistent { from: Point, to: Point },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "point {pos} is outside the maze {bounds}")
            }
            Self::Wall(p) => write!(f, "cannot construct path for wall at {p}"),
            Self::Unreachable(p) => {
                write!(f, "cannot construct path for unreachable cell at {p}")
            }
            Self::NonAdjacent { from, to } => {
                write!(f, "cells {from} and {to} are not next to each other")
            }
            Self::InvalidShape { width, height } => {
                write!(f, "invalid maze shape {width}x{height}")
            }
            Self::Inconsistent { from, to } => write!(
                f,
                "inconsistent analysis: step {from} -> {to} does not approach a goal"
            ),
        }
    }
}

impl std::error::Error for MazeError {}
