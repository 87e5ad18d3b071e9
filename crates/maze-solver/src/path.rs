//! Path reconstruction by following direction labels.

use maze_core::Point;

use crate::arrow::Arrow;
use crate::error::MazeError;
use crate::flood::Analysis;

impl Analysis {
    /// Shortest path from `start` to the goal it flows into.
    ///
    /// See [`reconstruct_path`].
    pub fn path(&self, start: Point) -> Result<Vec<Point>, MazeError> {
        reconstruct_path(self, start)
    }

    /// Paths of every actor that can reach a goal, in row-major actor order.
    pub fn actor_paths(&self) -> Vec<Vec<Point>> {
        self.actors
            .iter()
            .filter_map(|&p| match self.path(p) {
                Ok(path) => Some(path),
                Err(err) => {
                    log::debug!("no line for actor at {p}: {err}");
                    None
                }
            })
            .collect()
    }
}

/// Walk the direction labels of `analysis` from `start` until a goal.
///
/// The returned path contains both endpoints; its length is the distance of
/// `start` plus one and the distance drops by exactly one at every step.
///
/// Fails with [`MazeError::OutOfBounds`] if `start` is outside the maze,
/// [`MazeError::Wall`] if it is a wall and [`MazeError::Unreachable`] if no
/// goal can be reached from it. A label that does not lead one step closer
/// to a goal is reported as [`MazeError::Inconsistent`].
pub fn reconstruct_path(analysis: &Analysis, start: Point) -> Result<Vec<Point>, MazeError> {
    let arrows = analysis.arrows();
    let distances = analysis.distances();
    let (Some(mut arrow), Some(mut dist)) = (arrows.at(start), distances.at(start)) else {
        return Err(MazeError::OutOfBounds {
            pos: start,
            bounds: arrows.bounds(),
        });
    };
    match arrow {
        Arrow::Wall => return Err(MazeError::Wall(start)),
        Arrow::Unreached => return Err(MazeError::Unreachable(start)),
        _ => {}
    }

    let mut path = Vec::with_capacity(usize::try_from(dist).unwrap_or(0) + 1);
    path.push(start);
    let mut cur = start;
    while arrow != Arrow::Goal {
        let next = match arrow.heading() {
            Some(h) => h.step(cur),
            None => cur,
        };
        let inconsistent = MazeError::Inconsistent {
            from: cur,
            to: next,
        };
        let (Some(next_arrow), Some(next_dist)) = (arrows.at(next), distances.at(next)) else {
            return Err(inconsistent);
        };
        if next == cur
            || next_dist != dist - 1
            || matches!(next_arrow, Arrow::Wall | Arrow::Unreached)
        {
            return Err(inconsistent);
        }
        path.push(next);
        cur = next;
        arrow = next_arrow;
        dist = next_dist;
    }
    Ok(path)
}
