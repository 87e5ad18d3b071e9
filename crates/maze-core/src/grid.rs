//! The [`Grid`] type: a dense, owned 2D buffer.
//!
//! Cells are stored row-major and addressed by `y * width + x`. Every
//! accessor is bounds-checked and reports out-of-range points through its
//! return value instead of panicking.

use std::fmt;

use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row does not have the width of the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The cell buffer does not hold `width * height` cells.
    Shape {
        width: usize,
        height: usize,
        cells: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::Shape {
                width,
                height,
                cells,
            } => write!(f, "grid: {cells} cells do not fill {width}x{height}"),
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A 2D grid of `T` values with exclusive ownership of its storage.
///
/// The default grid is empty. Deserializing checks that the cell buffer
/// fills `width * height`, so a decoded grid upholds the same invariant as
/// one built in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr<T>"))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<GridRepr<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(repr: GridRepr<T>) -> Result<Self, GridError> {
        let GridRepr {
            cells,
            width,
            height,
        } = repr;
        let fits = i32::try_from(width).is_ok() && i32::try_from(height).is_ok();
        if !fits || width.checked_mul(height) != Some(cells.len()) {
            return Err(GridError::Shape {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }
}

impl<T: Copy + Default> Grid<T> {
    /// Create a new grid filled with `T::default()`.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, T::default())
    }
}

impl<T: Copy> Grid<T> {
    /// Create a new grid with every cell set to `value`.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn filled(width: i32, height: i32, value: T) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        Self {
            cells: vec![value; w * h],
            width: w,
            height: h,
        }
    }

    /// Build a grid from row vectors. All rows must have the same length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        // A grid without columns has no rows either.
        let height = if width == 0 { 0 } else { rows.len() };
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Read the cell at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<T> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`. Returns `false` (and does nothing) if `p` is out
    /// of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, value: T) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Fill every cell with `value`.
    pub fn fill(&mut self, value: T) {
        for c in self.cells.iter_mut() {
            *c = value;
        }
    }

    /// Row-major iterator over `(Point, T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, T)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Point, T) -> bool) -> usize {
        self.iter().filter(|&(p, c)| f(p, c)).count()
    }

    /// Build a grid of the same shape by applying `f` to every cell.
    pub fn map<U>(&self, mut f: impl FnMut(Point, T) -> U) -> Grid<U> {
        Grid {
            cells: self.iter().map(|(p, c)| f(p, c)).collect(),
            width: self.width,
            height: self.height,
        }
    }
}

impl<T> Grid<T> {
    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// Size as a `Point` (x = width, y = height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// The range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.width(), self.height())
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Point of a flat index, or `None` if `idx` is not below
    /// [`len`](Self::len).
    #[inline]
    pub fn point(&self, idx: usize) -> Option<Point> {
        if idx >= self.cells.len() {
            return None;
        }
        Some(Point::new(
            (idx % self.width) as i32,
            (idx / self.width) as i32,
        ))
    }

    /// Borrow the cell at `p`.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutably borrow the cell at `p`.
    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    /// The backing buffer, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Mutable access to the backing buffer, row-major.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterator over the rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks() rejects a zero size; an empty grid simply has no rows.
        self.cells.chunks(self.width.max(1))
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    /// One line per row, cells written back to back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
