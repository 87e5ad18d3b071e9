//! Compass moves ([`Heading`]) and per-cell direction labels ([`Arrow`]).

use std::fmt;

use maze_core::Point;

/// One of the four orthogonal moves between adjacent cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    Up,
    Left,
    Right,
    Down,
}

impl Heading {
    /// The fixed expansion order of the flood fill. Changing it changes
    /// which of several equally short routes is chosen.
    pub const ORDER: [Heading; 4] = [Heading::Up, Heading::Left, Heading::Right, Heading::Down];

    /// Offset of one step in this heading.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Heading::Up => Point::new(0, -1),
            Heading::Left => Point::new(-1, 0),
            Heading::Right => Point::new(1, 0),
            Heading::Down => Point::new(0, 1),
        }
    }

    /// The heading pointing back.
    #[inline]
    pub const fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
            Heading::Down => Heading::Up,
        }
    }

    /// The heading of the step from `from` to `to`, or `None` if the two
    /// points are not orthogonally adjacent.
    pub fn between(from: Point, to: Point) -> Option<Heading> {
        match (to.x - from.x, to.y - from.y) {
            (0, -1) => Some(Heading::Up),
            (-1, 0) => Some(Heading::Left),
            (1, 0) => Some(Heading::Right),
            (0, 1) => Some(Heading::Down),
            _ => None,
        }
    }

    /// `p` moved one step in this heading.
    #[inline]
    pub fn step(self, p: Point) -> Point {
        p + self.delta()
    }
}

/// The direction label the flood fill stores for each cell.
///
/// A step arrow says which neighbour is one step closer to a goal. The
/// remaining variants carry no outgoing step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
    /// The cell is a goal.
    Goal,
    /// The cell is a wall.
    Wall,
    /// Open, but no goal could be reached from here.
    #[default]
    Unreached,
}

impl Arrow {
    /// The move this arrow asks for, if any.
    #[inline]
    pub const fn heading(self) -> Option<Heading> {
        match self {
            Arrow::Up => Some(Heading::Up),
            Arrow::Down => Some(Heading::Down),
            Arrow::Left => Some(Heading::Left),
            Arrow::Right => Some(Heading::Right),
            Arrow::Goal | Arrow::Wall | Arrow::Unreached => None,
        }
    }

    /// Single-character form: `^ v < >` for steps, `X` goal, `#` wall and a
    /// space for unreached cells.
    pub const fn as_char(self) -> char {
        match self {
            Arrow::Up => '^',
            Arrow::Down => 'v',
            Arrow::Left => '<',
            Arrow::Right => '>',
            Arrow::Goal => 'X',
            Arrow::Wall => '#',
            Arrow::Unreached => ' ',
        }
    }

    /// Parse the single-character form produced by [`as_char`](Self::as_char).
    pub const fn from_char(ch: char) -> Option<Arrow> {
        match ch {
            '^' => Some(Arrow::Up),
            'v' => Some(Arrow::Down),
            '<' => Some(Arrow::Left),
            '>' => Some(Arrow::Right),
            'X' => Some(Arrow::Goal),
            '#' => Some(Arrow::Wall),
            ' ' => Some(Arrow::Unreached),
            _ => None,
        }
    }
}

impl From<Heading> for Arrow {
    fn from(h: Heading) -> Self {
        match h {
            Heading::Up => Arrow::Up,
            Heading::Left => Arrow::Left,
            Heading::Right => Arrow::Right,
            Heading::Down => Arrow::Down,
        }
    }
}

impl fmt::Display for Arrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
