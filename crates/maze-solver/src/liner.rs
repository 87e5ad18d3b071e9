//! Bit-encoded line networks for drawing paths.
//!
//! Each cell of a line mask records which of its four edge-midpoint stubs
//! (up, left, down, right) belong to a drawn path. Overlapping paths merge
//! into one network instead of being drawn twice, and a renderer picks one of
//! sixteen glyphs per cell.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use maze_core::{Grid, Point};

use crate::arrow::Heading;
use crate::error::MazeError;
use crate::flood::Analysis;

// ---------------------------------------------------------------------------
// Segments
// ---------------------------------------------------------------------------

/// Bitmask of the line stubs present in one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segments(u8);

impl Segments {
    pub const NONE: Self = Self(0);
    pub const UP: Self = Self(1 << 0);
    pub const LEFT: Self = Self(1 << 1);
    pub const DOWN: Self = Self(1 << 2);
    pub const RIGHT: Self = Self(1 << 3);

    /// Build a mask from raw bits. Bits above the fourth are dropped.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// The raw 4-bit value.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Box-drawing glyph for this combination of stubs.
    pub const fn glyph(self) -> char {
        const GLYPHS: [char; 16] = [
            ' ', '╵', '╴', '┘', '╷', '│', '┐', '┤', '╶', '└', '─', '┴', '┌', '├', '┬', '┼',
        ];
        GLYPHS[self.0 as usize]
    }
}

impl From<Heading> for Segments {
    fn from(h: Heading) -> Self {
        match h {
            Heading::Up => Segments::UP,
            Heading::Left => Segments::LEFT,
            Heading::Down => Segments::DOWN,
            Heading::Right => Segments::RIGHT,
        }
    }
}

impl BitOr for Segments {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Segments {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Segments {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for Segments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

// ---------------------------------------------------------------------------
// LineEncoder
// ---------------------------------------------------------------------------

/// One stub pair to set: `heading` leaves cell `from` and enters `to`.
#[derive(Clone, Copy, Debug)]
struct Edge {
    from: usize,
    to: usize,
    heading: Heading,
}

/// An encoding session: a line mask plus the set of cells already merged
/// into it.
///
/// When a line reaches a cell that an earlier line of the same session
/// already passed through, the edge into that cell is drawn and the rest of
/// the line is skipped. This is only correct if lines that meet share their
/// whole remaining route, which holds for paths taken from one [`Analysis`].
/// Lines from any other source must not meet unless they continue together.
pub struct LineEncoder {
    mask: Grid<Segments>,
    seen: Vec<bool>,
    visited: usize,
    edges: Vec<Edge>,
    marked: Vec<usize>,
}

impl LineEncoder {
    /// Start a session on an empty mask of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_mask(Grid::new(width, height))
    }

    /// Start a session that keeps adding to an existing mask. Stubs already
    /// in `mask` stay set.
    pub fn with_mask(mask: Grid<Segments>) -> Self {
        let seen = vec![false; mask.len()];
        Self {
            mask,
            seen,
            visited: 0,
            edges: Vec::new(),
            marked: Vec::new(),
        }
    }

    /// Merge one line (a sequence of orthogonally adjacent cells) into the
    /// mask.
    ///
    /// The line is checked up to the point where it would stop before any
    /// stub is written: on error the mask and the session are left exactly
    /// as they were. Fails with [`MazeError::NonAdjacent`] for a step that is
    /// not one cell up, left, down or right, and with
    /// [`MazeError::OutOfBounds`] for a cell outside the mask.
    pub fn add_line(&mut self, line: &[Point]) -> Result<(), MazeError> {
        self.edges.clear();
        self.marked.clear();
        if let Err(err) = self.plan(line) {
            for &i in &self.marked {
                self.seen[i] = false;
            }
            return Err(err);
        }

        let cells = self.mask.as_mut_slice();
        for e in &self.edges {
            cells[e.from] |= Segments::from(e.heading);
            cells[e.to] |= Segments::from(e.heading.opposite());
        }
        if !line.is_empty() {
            self.visited += self.marked.len() + 1;
        }
        Ok(())
    }

    /// Collect the edges of `line` and mark its new cells as seen.
    fn plan(&mut self, line: &[Point]) -> Result<(), MazeError> {
        let Some((&first, rest)) = line.split_first() else {
            return Ok(());
        };
        let mut last = first;
        let mut last_idx = self.locate(first)?;
        for &cell in rest {
            let idx = self.locate(cell)?;
            let heading = Heading::between(last, cell).ok_or(MazeError::NonAdjacent {
                from: last,
                to: cell,
            })?;
            self.edges.push(Edge {
                from: last_idx,
                to: idx,
                heading,
            });
            // The edge into a known cell is still new: two lines may enter
            // a shared cell from different sides.
            if self.seen[idx] {
                break;
            }
            self.seen[idx] = true;
            self.marked.push(idx);
            last = cell;
            last_idx = idx;
        }
        Ok(())
    }

    fn locate(&self, p: Point) -> Result<usize, MazeError> {
        self.mask.index(p).ok_or(MazeError::OutOfBounds {
            pos: p,
            bounds: self.mask.bounds(),
        })
    }

    /// The mask built so far.
    #[inline]
    pub fn mask(&self) -> &Grid<Segments> {
        &self.mask
    }

    /// Number of cells walked in this session: the first cell of each line
    /// plus every cell no earlier line had reached.
    #[inline]
    pub fn cells_visited(&self) -> usize {
        self.visited
    }

    /// End the session and return the mask.
    pub fn into_mask(self) -> Grid<Segments> {
        self.mask
    }
}

/// Encode `lines` into a new `width` × `height` mask in one session.
///
/// Lines are merged in order; see [`LineEncoder`] for the requirement on
/// lines that meet. The first failing line aborts the whole call.
pub fn encode_paths<I, L>(lines: I, width: i32, height: i32) -> Result<Grid<Segments>, MazeError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[Point]>,
{
    let mut enc = LineEncoder::new(width, height);
    for line in lines {
        enc.add_line(line.as_ref())?;
    }
    Ok(enc.into_mask())
}

/// Encode `lines` into an existing mask in one session.
///
/// Failure is per line: lines before the failing one stay merged into
/// `mask`, the failing line leaves no trace and later lines are not
/// processed.
pub fn encode_paths_into<I, L>(mask: &mut Grid<Segments>, lines: I) -> Result<(), MazeError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[Point]>,
{
    let mut enc = LineEncoder::with_mask(std::mem::take(mask));
    let result = lines
        .into_iter()
        .try_for_each(|line| enc.add_line(line.as_ref()));
    *mask = enc.into_mask();
    result
}

impl Analysis {
    /// The line network of every actor's path to its goal.
    pub fn lines(&self) -> Grid<Segments> {
        let mut enc = LineEncoder::new(self.width(), self.height());
        for path in self.actor_paths() {
            if let Err(err) = enc.add_line(&path) {
                log::warn!("dropping actor line: {err}");
            }
        }
        log::debug!("encoded actor lines over {} cells", enc.cells_visited());
        enc.into_mask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flood::analyze;
    use crate::testutil::{maze, room};

    fn pts(cells: &[(i32, i32)]) -> Vec<Point> {
        cells.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn segments_ops() {
        let m = Segments::UP | Segments::RIGHT;
        assert!(m.contains(Segments::UP));
        assert!(m.contains(Segments::RIGHT));
        assert!(!m.contains(Segments::LEFT));
        assert_eq!(m & Segments::UP, Segments::UP);
        assert_eq!(m.bits(), 0b1001);
        assert_eq!(Segments::from_bits(0xff).bits(), 0b1111);
        assert!(Segments::NONE.is_empty());
    }

    #[test]
    fn glyphs() {
        assert_eq!(Segments::NONE.glyph(), ' ');
        assert_eq!((Segments::UP | Segments::DOWN).glyph(), '│');
        assert_eq!((Segments::LEFT | Segments::RIGHT).glyph(), '─');
        assert_eq!((Segments::DOWN | Segments::RIGHT).glyph(), '┌');
        assert_eq!((Segments::UP | Segments::LEFT).glyph(), '┘');
        assert_eq!(Segments::from_bits(0b1111).to_string(), "┼");
    }

    #[test]
    fn straight_line() {
        let mask = encode_paths([pts(&[(0, 0), (1, 0), (2, 0)])], 3, 1).unwrap();
        assert_eq!(mask.as_slice()[0], Segments::RIGHT);
        assert_eq!(mask.as_slice()[1], Segments::LEFT | Segments::RIGHT);
        assert_eq!(mask.as_slice()[2], Segments::LEFT);
        assert_eq!(mask.to_string(), "╶─╴");
    }

    #[test]
    fn turning_line() {
        let line = pts(&[(0, 0), (0, 1), (1, 1), (1, 0)]);
        let mask = encode_paths([line], 2, 2).unwrap();
        assert_eq!(mask.to_string(), "╷╷\n└┘");
    }

    #[test]
    fn single_cell_and_empty_lines_draw_nothing() {
        let empty: [Vec<Point>; 2] = [vec![], vec![Point::new(1, 1)]];
        let mask = encode_paths(empty, 3, 3).unwrap();
        assert!(mask.as_slice().iter().all(|s| s.is_empty()));
    }

    #[test]
    fn converging_lines_merge_and_stop() {
        // A runs along the top row into the corner; B comes up the middle
        // column and joins A at (2, 0).
        let a = pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        let b = pts(&[(2, 2), (2, 1), (2, 0), (3, 0), (4, 0)]);
        let mut enc = LineEncoder::new(5, 3);
        enc.add_line(&a).unwrap();
        assert_eq!(enc.cells_visited(), 5);
        enc.add_line(&b).unwrap();
        // B adds its start and (2, 1); the shared suffix is not walked again.
        assert_eq!(enc.cells_visited(), 7);
        let unique: std::collections::HashSet<_> = a.iter().chain(&b).collect();
        assert_eq!(enc.cells_visited(), unique.len());

        let mask = enc.into_mask();
        let at = |x, y| mask.at(Point::new(x, y)).unwrap();
        assert_eq!(at(2, 0), Segments::LEFT | Segments::RIGHT | Segments::DOWN);
        assert_eq!(at(3, 0), Segments::LEFT | Segments::RIGHT);
        assert_eq!(at(2, 1), Segments::UP | Segments::DOWN);
        assert_eq!(at(2, 2), Segments::UP);
        assert_eq!(mask.to_string(), "╶─┬─╴\n  │  \n  ╵  ");
    }

    #[test]
    fn non_adjacent_step_leaves_no_trace() {
        let mut enc = LineEncoder::new(4, 4);
        let bad = pts(&[(0, 0), (1, 0), (2, 1)]);
        assert_eq!(
            enc.add_line(&bad),
            Err(MazeError::NonAdjacent {
                from: Point::new(1, 0),
                to: Point::new(2, 1),
            })
        );
        assert!(enc.mask().as_slice().iter().all(|s| s.is_empty()));
        assert_eq!(enc.cells_visited(), 0);

        // (1, 0) was not left behind in the seen set: this line is drawn in
        // full instead of stopping there.
        enc.add_line(&pts(&[(0, 1), (0, 0), (1, 0), (2, 0)])).unwrap();
        assert_eq!(enc.mask().at(Point::new(2, 0)), Some(Segments::LEFT));
    }

    #[test]
    fn diagonal_and_repeated_cells_are_not_adjacent() {
        for bad in [pts(&[(0, 0), (1, 1)]), pts(&[(1, 1), (1, 1)]), pts(&[(0, 0), (0, 2)])] {
            assert!(matches!(
                encode_paths([bad], 3, 3),
                Err(MazeError::NonAdjacent { .. })
            ));
        }
    }

    #[test]
    fn out_of_bounds_cell() {
        let err = encode_paths([pts(&[(1, 0), (2, 0)])], 2, 1).unwrap_err();
        assert_eq!(
            err,
            MazeError::OutOfBounds {
                pos: Point::new(2, 0),
                bounds: maze_core::Range::sized(2, 1),
            }
        );
    }

    #[test]
    fn into_existing_mask_keeps_prior_lines() {
        let mut mask: Grid<Segments> = Grid::new(3, 2);
        mask.set(Point::new(0, 1), Segments::DOWN);
        let lines = [
            pts(&[(0, 0), (1, 0)]),
            pts(&[(2, 0), (2, 1)]),
            pts(&[(0, 1), (2, 1)]),
            pts(&[(1, 1), (0, 1)]),
        ];
        let err = encode_paths_into(&mut mask, &lines).unwrap_err();
        assert!(matches!(err, MazeError::NonAdjacent { .. }));
        assert_eq!(mask.at(Point::new(0, 1)), Some(Segments::DOWN));
        assert_eq!(mask.at(Point::new(0, 0)), Some(Segments::RIGHT));
        assert_eq!(mask.at(Point::new(2, 1)), Some(Segments::UP));
        // The line after the failing one was not processed.
        assert_eq!(mask.at(Point::new(1, 1)), Some(Segments::NONE));
    }

    #[test]
    fn analysis_paths_share_suffixes() {
        let a = analyze(&room(6, 6)).unwrap();
        let starts = [Point::new(5, 5), Point::new(5, 4), Point::new(3, 5)];
        let paths: Vec<_> = starts.iter().map(|&p| a.path(p).unwrap()).collect();
        let mut enc = LineEncoder::new(6, 6);
        for p in &paths {
            enc.add_line(p).unwrap();
        }
        let unique: std::collections::HashSet<_> = paths.iter().flatten().collect();
        // At worst a line's start is counted again on top of the cells it
        // shares with an earlier line.
        assert!(enc.cells_visited() <= unique.len() + paths.len());
        let total: usize = paths.iter().map(Vec::len).sum();
        assert!(enc.cells_visited() < total);

        // Drawing every path in full, without the early stop, gives the
        // same picture.
        let mut full = Grid::<Segments>::new(6, 6);
        for p in &paths {
            for w in p.windows(2) {
                let h = Heading::between(w[0], w[1]).unwrap();
                *full.get_mut(w[0]).unwrap() |= Segments::from(h);
                *full.get_mut(w[1]).unwrap() |= Segments::from(h.opposite());
            }
        }
        assert_eq!(enc.into_mask(), full);
    }

    #[test]
    fn actor_lines() {
        let a = analyze(&maze(
            "\
2...
.##.
...X
3#.#",
        ))
        .unwrap();
        let lines = a.lines();
        assert_eq!(a.actors().len(), 2);
        for path in a.actor_paths() {
            for w in path.windows(2) {
                let h = Heading::between(w[0], w[1]).unwrap();
                assert!(lines.at(w[0]).unwrap().contains(Segments::from(h)));
                assert!(lines.at(w[1]).unwrap().contains(Segments::from(h.opposite())));
            }
        }
        // Cells on no path stay blank.
        assert_eq!(lines.at(Point::new(2, 3)), Some(Segments::NONE));
    }
}
