//! The [`Tile`] classification of raw maze values.
//!
//! A maze is a [`Grid<i8>`](crate::Grid). Negative values are walls (the
//! authoring tool knows several wall variants), zero is open floor, one is a
//! goal and anything above one is an actor standing on open floor.

/// Raw value of a breakable wall.
pub const WALL: i8 = -1;
/// Raw value of an unbreakable wall.
pub const SOLID_WALL: i8 = -2;
/// Raw value of open floor.
pub const FLOOR: i8 = 0;
/// Raw value of a goal cell.
pub const GOAL: i8 = 1;

/// What a single maze value means to the solver.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Impassable. Carries the raw (negative) variant.
    Wall(i8),
    /// Open floor.
    Floor,
    /// A destination of the flood fill.
    Goal,
    /// An actor on open floor. Carries the raw (> 1) kind.
    Actor(i8),
}

impl Tile {
    /// Classify a raw maze value.
    #[inline]
    pub const fn of(value: i8) -> Self {
        match value {
            v if v < 0 => Tile::Wall(v),
            FLOOR => Tile::Floor,
            GOAL => Tile::Goal,
            v => Tile::Actor(v),
        }
    }

    /// Whether a path may enter this tile.
    #[inline]
    pub const fn is_open(self) -> bool {
        !matches!(self, Tile::Wall(_))
    }

    /// The raw value this tile was classified from.
    #[inline]
    pub const fn value(self) -> i8 {
        match self {
            Tile::Wall(v) | Tile::Actor(v) => v,
            Tile::Floor => FLOOR,
            Tile::Goal => GOAL,
        }
    }
}

impl From<i8> for Tile {
    fn from(v: i8) -> Self {
        Tile::of(v)
    }
}

impl From<Tile> for i8 {
    fn from(t: Tile) -> Self {
        t.value()
    }
}
