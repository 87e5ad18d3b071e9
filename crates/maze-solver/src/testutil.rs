//! Fixtures shared by the unit tests.

use std::collections::VecDeque;

use maze_core::{FLOOR, GOAL, Grid, Maze, Point, SOLID_WALL, Tile, WALL};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::arrow::{Arrow, Heading};
use crate::flood::UNKNOWN;

/// Edge lengths the room-shaped fixtures are built with.
pub(crate) const SIZES: [i32; 4] = [1, 2, 5, 20];

/// Parse a text maze: `#` wall, `@` unbreakable wall, `.` floor, `X` goal,
/// `2`..`9` actors.
pub(crate) fn maze(text: &str) -> Maze {
    let rows: Vec<Vec<i8>> = text
        .lines()
        .map(|l| {
            l.chars()
                .map(|ch| match ch {
                    '#' => WALL,
                    '@' => SOLID_WALL,
                    '.' => FLOOR,
                    'X' => GOAL,
                    d @ '2'..='9' => (d as u8 - b'0') as i8,
                    other => panic!("unexpected maze character {other:?}"),
                })
                .collect()
        })
        .collect();
    Maze::from_rows(&rows).unwrap()
}

/// Parse a grid of arrows in their single-character form.
pub(crate) fn arrows_from_text(text: &str) -> Grid<Arrow> {
    let rows: Vec<Vec<Arrow>> = text
        .lines()
        .map(|l| l.chars().map(|ch| Arrow::from_char(ch).unwrap()).collect())
        .collect();
    Grid::from_rows(&rows).unwrap()
}

/// An open room with a single goal in the top-left corner.
pub(crate) fn room(w: i32, h: i32) -> Maze {
    let mut m = Maze::filled(w, h, FLOOR);
    m.set(Point::ZERO, GOAL);
    m
}

/// A reproducible random maze with roughly 30% walls and a few goals.
pub(crate) fn random_maze(seed: u64, w: i32, h: i32) -> Maze {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = Maze::new(w, h);
    for p in m.bounds() {
        let v = match rng.random_range(0..20u32) {
            0..=5 => WALL,
            6 => GOAL,
            7 => 2,
            _ => FLOOR,
        };
        m.set(p, v);
    }
    m
}

/// Distance of every cell to its nearest goal, found by an independent
/// breadth-first search from each cell.
pub(crate) fn brute_force_distances(m: &Maze) -> Grid<i32> {
    m.map(|start, v| {
        if !Tile::of(v).is_open() {
            return UNKNOWN;
        }
        let mut dist = Grid::filled(m.width(), m.height(), UNKNOWN);
        dist.set(start, 0);
        let mut queue = VecDeque::from([start]);
        while let Some(p) = queue.pop_front() {
            let d = dist.at(p).unwrap();
            if m.at(p) == Some(GOAL) {
                return d;
            }
            for h in Heading::ORDER {
                let n = h.step(p);
                let open = m.at(n).is_some_and(|v| Tile::of(v).is_open());
                if open && dist.at(n) == Some(UNKNOWN) {
                    dist.set(n, d + 1);
                    queue.push_back(n);
                }
            }
        }
        UNKNOWN
    })
}

/// A serpentine maze together with its expected analysis.
pub(crate) struct Serpentine {
    pub(crate) maze: Maze,
    pub(crate) distances: Grid<i32>,
    pub(crate) arrows: Grid<Arrow>,
    /// The single corridor, from the top-left cell to the goal.
    pub(crate) path: Vec<Point>,
}

/// Build a serpentine maze of `w` columns and `h` rows:
///
/// ```text
/// v#>>v#X
/// v#^#v#^
/// v#^#v#^
/// >>^#>>^
/// ```
pub(crate) fn s_shape(w: i32, h: i32) -> Serpentine {
    let mut maze = Maze::filled(w, h, WALL);
    let mut arrows = Grid::filled(w, h, Arrow::Wall);
    let mut distances = Grid::filled(w, h, UNKNOWN);
    let mut path = Vec::new();

    for x in 0..w {
        if x % 2 == 0 {
            for y in 0..h {
                maze.set(Point::new(x, y), FLOOR);
            }
            if x % 4 == 0 {
                for y in 0..h {
                    arrows.set(Point::new(x, y), Arrow::Down);
                }
                arrows.set(Point::new(x, h - 1), Arrow::Right);
                path.extend((0..h).map(|y| Point::new(x, y)));
            } else {
                for y in 0..h {
                    arrows.set(Point::new(x, y), Arrow::Up);
                }
                arrows.set(Point::new(x, 0), Arrow::Right);
                path.extend((0..h).rev().map(|y| Point::new(x, y)));
            }
        } else {
            let y = if x % 4 == 1 { h - 1 } else { 0 };
            let p = Point::new(x, y);
            path.push(p);
            maze.set(p, FLOOR);
            arrows.set(p, Arrow::Right);
        }
    }

    let x = w - 1;
    let target = Point::new(x, if x % 4 < 2 { h - 1 } else { 0 });
    maze.set(target, GOAL);
    arrows.set(target, Arrow::Goal);

    for (i, &p) in path.iter().rev().enumerate() {
        distances.set(p, i as i32);
    }

    Serpentine {
        maze,
        distances,
        arrows,
        path,
    }
}
