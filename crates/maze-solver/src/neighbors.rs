use maze_core::Point;

use crate::arrow::Heading;

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal neighbours of a cell in [`Heading::ORDER`]
/// (up, left, right, down), filtered by a predicate, reusing one buffer
/// across calls.
pub(crate) struct Neighbors {
    buf: Vec<(Heading, Point)>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub(crate) fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbours of `p` together with the heading that
    /// leads to them, keeping only those for which `keep` returns `true`.
    pub(crate) fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[(Heading, Point)] {
        self.buf.clear();
        for h in Heading::ORDER {
            let n = h.step(p);
            if keep(n) {
                self.buf.push((h, n));
            }
        }
        &self.buf
    }
}
