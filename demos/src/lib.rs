//! Text helpers shared by the maze demo.
//!
//! Mazes are written as ASCII art, one character per cell:
//!
//! | Char | Cell |
//! |---|---|
//! | `#` | wall |
//! | `@` | unbreakable wall |
//! | `.` | floor |
//! | `X` | goal |
//! | `2`..`6` | actor |

use std::fmt;

use maze_core::{FLOOR, GOAL, GridError, Maze, Point, SOLID_WALL, Tile, WALL};
use maze_solver::{Analysis, Arrow};

/// Errors that can occur when reading a text maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMazeError {
    /// Lines have inconsistent widths.
    InconsistentSize { line: usize },
    /// A character that is not a maze cell.
    InvalidRune { ch: char, pos: Point },
    /// No cells at all.
    Empty,
    /// The rows could not be assembled into a grid.
    Grid(GridError),
}

impl fmt::Display for TextMazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize { line } => {
                write!(f, "maze: line {line} does not match the width of the first line")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "maze contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::Empty => write!(f, "maze is empty"),
            Self::Grid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for TextMazeError {}

/// Parse an ASCII maze. Surrounding blank lines are ignored.
pub fn parse_maze(text: &str) -> Result<Maze, TextMazeError> {
    let mut rows: Vec<Vec<i8>> = Vec::new();
    for (y, line) in text.trim_matches('\n').lines().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (x, ch) in line.chars().enumerate() {
            let v = match ch {
                '#' => WALL,
                '@' => SOLID_WALL,
                '.' => FLOOR,
                'X' => GOAL,
                '2'..='6' => (ch as u8 - b'0') as i8,
                _ => {
                    return Err(TextMazeError::InvalidRune {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    });
                }
            };
            row.push(v);
        }
        rows.push(row);
    }
    let maze = Maze::from_rows(&rows).map_err(|err| match err {
        GridError::Ragged { row, .. } => TextMazeError::InconsistentSize { line: row },
        other => TextMazeError::Grid(other),
    })?;
    if maze.is_empty() {
        return Err(TextMazeError::Empty);
    }
    Ok(maze)
}

/// Draw the maze with the actors' line network on top of the floor.
pub fn render_lines(maze: &Maze, analysis: &Analysis) -> String {
    let lines = analysis.lines();
    let cells = maze.map(|p, v| match Tile::of(v) {
        Tile::Wall(_) => '#',
        Tile::Goal => 'X',
        Tile::Actor(kind) => char::from(b'0' + kind as u8),
        Tile::Floor => match lines.at(p) {
            Some(s) if !s.is_empty() => s.glyph(),
            _ => '.',
        },
    });
    cells.to_string()
}

/// Draw the distance of every cell modulo ten. Walls are `#`, unreached
/// cells are blank.
pub fn render_distances(analysis: &Analysis) -> String {
    analysis
        .arrows()
        .map(|p, a| match (a, analysis.distance(p)) {
            (Arrow::Wall, _) => '#',
            (_, Some(d)) => char::from(b'0' + (d % 10) as u8),
            (_, None) => ' ',
        })
        .to_string()
}
