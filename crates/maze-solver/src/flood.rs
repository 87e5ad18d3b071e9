//! Multi-source breadth-first flood fill from every goal of a maze.

use std::collections::VecDeque;

use maze_core::{Grid, Maze, Point, Range, Tile};

use crate::arrow::Arrow;
use crate::error::MazeError;
use crate::neighbors::Neighbors;
use crate::reach::is_reachable;

/// Sentinel distance of walls and of cells no goal could reach.
pub const UNKNOWN: i32 = -1;

/// The result of flooding a maze from its goals.
///
/// Every grid has the shape of the analyzed maze. The analysis never changes
/// after [`FloodFill::analyze`] returns it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    pub(crate) distances: Grid<i32>,
    pub(crate) arrows: Grid<Arrow>,
    pub(crate) goals: Vec<Point>,
    pub(crate) actors: Vec<Point>,
    pub(crate) reachable: bool,
}

impl Analysis {
    /// Shortest hop count from each cell to its nearest goal, or
    /// [`UNKNOWN`] for walls and unreached cells.
    #[inline]
    pub fn distances(&self) -> &Grid<i32> {
        &self.distances
    }

    /// Direction label of each cell.
    #[inline]
    pub fn arrows(&self) -> &Grid<Arrow> {
        &self.arrows
    }

    /// Goal cells in row-major order.
    #[inline]
    pub fn goals(&self) -> &[Point] {
        &self.goals
    }

    /// Actor cells (raw values above one) in row-major order.
    #[inline]
    pub fn actors(&self) -> &[Point] {
        &self.actors
    }

    /// Whether every open cell can reach a goal.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.reachable
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.arrows.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.arrows.height()
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.arrows.bounds()
    }

    /// Distance from `p` to its nearest goal. `None` for walls, unreached
    /// cells and points outside the maze.
    pub fn distance(&self, p: Point) -> Option<u32> {
        self.distances
            .at(p)
            .and_then(|d| u32::try_from(d).ok())
    }

    /// Direction label at `p`, or `None` outside the maze.
    #[inline]
    pub fn arrow(&self, p: Point) -> Option<Arrow> {
        self.arrows.at(p)
    }
}

/// A pending relaxation: enter cell `idx` at distance `dist` with `arrow`.
#[derive(Clone, Copy, Debug)]
struct Job {
    idx: usize,
    dist: i32,
    arrow: Arrow,
}

/// Reusable flood-fill runner.
///
/// `FloodFill` owns its work queue so that repeated analyses (an editor
/// re-analyzing after every change) do not reallocate it.
#[derive(Default)]
pub struct FloodFill {
    queue: VecDeque<Job>,
    nbuf: Neighbors,
}

impl FloodFill {
    /// Create a new runner with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flood `maze` from all of its goals at once.
    ///
    /// Goals are seeded in row-major order and neighbours are expanded up,
    /// left, right, down. A cell keeps the first label it receives: when
    /// several shortest routes exist, the first one discovered in that order
    /// wins. Fails with [`MazeError::InvalidShape`] if the maze has no cells.
    pub fn analyze(&mut self, maze: &Maze) -> Result<Analysis, MazeError> {
        if maze.is_empty() {
            return Err(MazeError::InvalidShape {
                width: maze.width(),
                height: maze.height(),
            });
        }

        let mut distances = Grid::filled(maze.width(), maze.height(), UNKNOWN);
        let mut arrows = maze.map(|_, v| {
            if Tile::of(v).is_open() {
                Arrow::Unreached
            } else {
                Arrow::Wall
            }
        });

        let mut goals = Vec::new();
        let mut actors = Vec::new();
        self.queue.clear();
        for (i, (p, v)) in maze.iter().enumerate() {
            match Tile::of(v) {
                Tile::Goal => {
                    goals.push(p);
                    self.queue.push_back(Job {
                        idx: i,
                        dist: 0,
                        arrow: Arrow::Goal,
                    });
                }
                Tile::Actor(_) => actors.push(p),
                Tile::Wall(_) | Tile::Floor => {}
            }
        }

        let mut high_water = self.queue.len();
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let dist_buf = distances.as_mut_slice();
        let arrow_buf = arrows.as_mut_slice();

        while let Some(Job { idx, dist, arrow }) = self.queue.pop_front() {
            // It's a wall or we've been there on an equal or shorter route.
            if arrow_buf[idx] == Arrow::Wall {
                continue;
            }
            if (0..=dist).contains(&dist_buf[idx]) {
                continue;
            }
            arrow_buf[idx] = arrow;
            dist_buf[idx] = dist;

            let Some(p) = maze.point(idx) else {
                continue;
            };
            for &(h, n) in nbuf.cardinal(p, |n| maze.contains(n)) {
                if let Some(ni) = maze.index(n) {
                    // Entering `n` by moving `h` means `n` leads back the
                    // opposite way.
                    self.queue.push_back(Job {
                        idx: ni,
                        dist: dist + 1,
                        arrow: Arrow::from(h.opposite()),
                    });
                }
            }
            high_water = high_water.max(self.queue.len());
        }
        self.nbuf = nbuf;

        let reachable = is_reachable(&arrows);
        if log::log_enabled!(log::Level::Debug) {
            let open = arrows.count_fn(|_, a| a != Arrow::Wall);
            let reached = distances.count_fn(|_, d| d >= 0);
            log::debug!(
                "analyzed {}x{} maze: {} goals, {}/{} open cells reached, reachable={}",
                maze.width(),
                maze.height(),
                goals.len(),
                reached,
                open,
                reachable
            );
        }
        log::trace!("flood queue high-water mark: {high_water}");

        Ok(Analysis {
            distances,
            arrows,
            goals,
            actors,
            reachable,
        })
    }
}

/// Analyze `maze` with a fresh [`FloodFill`].
pub fn analyze(maze: &Maze) -> Result<Analysis, MazeError> {
    FloodFill::new().analyze(maze)
}
